use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    fmt::Debug,
    ops::{Deref, DerefMut},
};

use log::trace;

/// Supertrait that collects all the requirements on the NodeReference values
/// Must be copy, comparable and not references (hence 'static)
pub trait NodeReference: Copy + Eq + 'static {}

pub trait MapTrait {
    /// The type that can be used to reference nodes in the map
    type Reference: NodeReference;

    /// The type that the map uses for storage
    type Storage<T: Default + Copy + Clone + 'static>: MapStorage<T, Reference = Self::Reference>;

    /// Check if the provided node reference is valid
    fn is_valid(&self, node: Self::Reference) -> bool;

    /// Return an iterator over the neighbors of the provided node and the cost required to go there
    fn neighbors_of(&self, node: Self::Reference)
        -> impl Iterator<Item = (Self::Reference, usize)>;

    /// Create a storage for values of type T
    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T>;
}

pub trait MapStorage<T> {
    type Reference: NodeReference;

    fn get(&self, node: Self::Reference) -> T;
    fn get_mut(&mut self, node: Self::Reference) -> &mut T;
}

/// The objects that we store in the priority queue
#[derive(Debug)]
struct ToVisit<R: Eq> {
    cost: usize,
    point: R,
    from: Option<R>,
}

impl<R: Eq> Ord for ToVisit<R> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost.cmp(&other.cost).reverse() // reverse for BinaryHeap to be a min-heap
    }
}

impl<R: Eq> PartialOrd for ToVisit<R> {
    fn partial_cmp(&self, other: &ToVisit<R>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Eq> PartialEq for ToVisit<R> {
    fn eq(&self, other: &ToVisit<R>) -> bool {
        self.cost == other.cost
    }
}

impl<R: Eq> Eq for ToVisit<R> {}

#[derive(Clone, Copy, Debug)]
pub struct VisitedItem<R> {
    pub cost: usize,
    pub from: Option<R>,
}

#[derive(Clone, Copy, Debug)]
pub struct Visited<R>(Option<VisitedItem<R>>);

impl<R> Default for Visited<R> {
    fn default() -> Self {
        Visited(None)
    }
}
impl<R> Deref for Visited<R> {
    type Target = Option<VisitedItem<R>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<R> DerefMut for Visited<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct PathResult<R> {
    pub path: Vec<R>,
    pub start: R,
    pub goal: R,
    pub total_cost: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState<R> {
    Computing,
    NoPathFound,
    PathFound(PathResult<R>),
}

impl<R> PathFinderState<R> {
    fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// Dijkstra search from `start` to `goal` that can be advanced one node at a time.
#[derive(Debug)]
pub struct PathFinder<
    R: NodeReference,
    S: MapStorage<Visited<R>, Reference = R>,
    M: MapTrait<Reference = R, Storage<Visited<R>> = S>,
> {
    start: R,
    goal: R,
    visited: S,
    visit_list: BinaryHeap<ToVisit<R>>,
    state: PathFinderState<R>,
    _map: std::marker::PhantomData<M>,
}

impl<
        R: NodeReference + Debug,
        S: MapStorage<Visited<R>, Reference = R>,
        M: MapTrait<Reference = R, Storage<Visited<R>> = S>,
    > PathFinder<R, S, M>
{
    pub fn new(start: R, goal: R, visited: S) -> Self {
        Self {
            start,
            goal,
            visited,
            visit_list: BinaryHeap::from([ToVisit {
                cost: 0,
                point: start,
                from: None,
            }]),
            state: PathFinderState::Computing,
            _map: std::marker::PhantomData,
        }
    }

    pub fn finish(mut self, map: &M) -> (PathFinderState<R>, S) {
        loop {
            match self.step(map) {
                PathFinderState::Computing => {}
                s => return (s, self.visited),
            }
        }
    }

    pub fn step(&mut self, map: &M) -> PathFinderState<R> {
        if self.state.is_done() {
            return self.state.clone();
        }
        let Some(visit) = self.visit_list.pop() else {
            trace!("no path from {:?} to {:?}", self.start, self.goal);
            self.state = PathFinderState::NoPathFound;
            return self.state.clone();
        };

        if !map.is_valid(visit.point) || self.visited.get(visit.point).is_some() {
            return self.state.clone();
        }

        *self.visited.get_mut(visit.point) = Visited(Some(VisitedItem {
            cost: visit.cost,
            from: visit.from,
        }));

        if visit.point == self.goal {
            trace!("found goal {:?}: cost={}", self.goal, visit.cost);

            self.state = PathFinderState::PathFound(PathResult {
                path: self.backtrack(),
                total_cost: visit.cost,
                start: self.start,
                goal: self.goal,
            });

            return self.state.clone();
        }

        for (point, move_cost) in map.neighbors_of(visit.point) {
            if self.visited.get(point).is_none() {
                self.visit_list.push(ToVisit {
                    cost: visit.cost + move_cost,
                    point,
                    from: Some(visit.point),
                });
            }
        }

        self.state.clone()
    }

    /// Walks the `from` links back from the goal to the start.
    fn backtrack(&self) -> Vec<R> {
        let mut path: Vec<R> = vec![self.goal];
        let mut previous_visit = self.visited.get(self.goal);

        while let Visited(Some(VisitedItem {
            from: Some(from), ..
        })) = previous_visit
        {
            path.push(from);
            previous_visit = self.visited.get(from);
        }

        path.reverse();
        path
    }
}

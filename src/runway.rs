use crate::error::{SimError, SimResult};

/// Runway number as printed in clearance messages, 1-indexed.
pub type RunwayId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runway {
    id: RunwayId,
    available: bool,
}

impl Runway {
    pub fn id(&self) -> RunwayId {
        self.id
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

/// Fixed set of runway slots. The pool only tracks availability flags; which
/// plane holds a runway is carried by the in-flight action/complete event.
#[derive(Debug, Clone)]
pub struct RunwayPool {
    runways: Vec<Runway>,
}

impl RunwayPool {
    pub fn new(count: u32) -> Self {
        RunwayPool {
            runways: (1..=count).map(|id| Runway { id, available: true }).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.runways.len()
    }

    pub fn get(&self, id: RunwayId) -> SimResult<&Runway> {
        self.index(id).map(|i| &self.runways[i])
    }

    /// First available runway in ascending id order. The scan order decides
    /// which physical runway a plane gets when several are free.
    pub fn first_unoccupied(&self) -> Option<RunwayId> {
        self.runways.iter().find(|r| r.is_available()).map(|r| r.id)
    }

    pub fn assign(&mut self, id: RunwayId) -> SimResult<()> {
        let i = self.index(id)?;
        debug_assert!(self.runways[i].available, "runway {id} assigned twice");
        self.runways[i].available = false;
        Ok(())
    }

    pub fn clear(&mut self, id: RunwayId) -> SimResult<()> {
        let i = self.index(id)?;
        debug_assert!(!self.runways[i].available, "runway {id} cleared while free");
        self.runways[i].available = true;
        Ok(())
    }

    pub fn occupied_count(&self) -> usize {
        self.runways.iter().filter(|r| !r.available).count()
    }

    fn index(&self, id: RunwayId) -> SimResult<usize> {
        if id >= 1 && (id as usize) <= self.runways.len() {
            Ok(id as usize - 1)
        } else {
            Err(SimError::RunwayOutOfRange(id))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    AwaitingResponse,
}

impl RequestPhase {
    pub fn is_busy(self) -> bool {
        self == RequestPhase::AwaitingResponse
    }
}

/// Counts outstanding requests for one controller. Overlapping requests are
/// allowed; the controller is idle again once every response has been handled.
#[derive(Debug, Default)]
pub struct RequestTracker {
    in_flight: usize,
}

impl RequestTracker {
    pub fn begin(&mut self) -> RequestPhase {
        self.in_flight += 1;
        self.phase()
    }

    pub fn finish(&mut self) -> RequestPhase {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.phase()
    }

    pub fn phase(&self) -> RequestPhase {
        if self.in_flight == 0 {
            RequestPhase::Idle
        } else {
            RequestPhase::AwaitingResponse
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

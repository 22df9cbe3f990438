use crate::plane::{Plane, RequestKind, Size};
use crate::runway::RunwayId;
use crate::time::Time;
use std::fmt;
use std::fmt::Formatter;

/// Minutes any plane spends on the runway itself.
pub const RUNWAY_USAGE: u64 = 1;
/// Extra minutes an inbound plane needs to locate the runway from the air.
pub const LOCATE_TIME: u64 = 2;

/// Minutes a clearance keeps its runway occupied.
pub fn clearance_duration(kind: RequestKind, size: Size) -> u64 {
    match kind {
        RequestKind::Landing => RUNWAY_USAGE + LOCATE_TIME + size.turbulence_minutes(),
        RequestKind::Takeoff => RUNWAY_USAGE + size.turbulence_minutes(),
    }
}

/// One step in a plane's lifecycle: Request -> Landing/Takeoff -> Complete.
/// Events are plain values; dispatching one consumes it and may produce the
/// next link in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RequestLanding { time: Time, plane: Plane },
    RequestTakeoff { time: Time, plane: Plane },
    Landing { time: Time, plane: Plane, runway: RunwayId },
    Takeoff { time: Time, plane: Plane, runway: RunwayId },
    Complete { time: Time, plane: Plane, runway: RunwayId },
}

impl Event {
    /// The request event a plane enters the simulation with, at its own
    /// request time.
    pub fn request(plane: Plane) -> Event {
        let time = plane.request_time;
        match plane.request {
            RequestKind::Landing => Event::RequestLanding { time, plane },
            RequestKind::Takeoff => Event::RequestTakeoff { time, plane },
        }
    }

    /// The clearance granted to `plane` on `runway`, shaped by what the plane
    /// originally asked for.
    pub fn action(time: Time, plane: Plane, runway: RunwayId) -> Event {
        match plane.request {
            RequestKind::Landing => Event::Landing { time, plane, runway },
            RequestKind::Takeoff => Event::Takeoff { time, plane, runway },
        }
    }

    pub fn complete(time: Time, plane: Plane, runway: RunwayId) -> Event {
        Event::Complete { time, plane, runway }
    }

    pub fn time(&self) -> Time {
        match self {
            Event::RequestLanding { time, .. }
            | Event::RequestTakeoff { time, .. }
            | Event::Landing { time, .. }
            | Event::Takeoff { time, .. }
            | Event::Complete { time, .. } => *time,
        }
    }

    pub fn plane(&self) -> &Plane {
        match self {
            Event::RequestLanding { plane, .. }
            | Event::RequestTakeoff { plane, .. }
            | Event::Landing { plane, .. }
            | Event::Takeoff { plane, .. }
            | Event::Complete { plane, .. } => plane,
        }
    }

    pub fn runway(&self) -> Option<RunwayId> {
        match self {
            Event::RequestLanding { .. } | Event::RequestTakeoff { .. } => None,
            Event::Landing { runway, .. }
            | Event::Takeoff { runway, .. }
            | Event::Complete { runway, .. } => Some(*runway),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Event::RequestLanding { time, plane } => {
                write!(f, "TIME: {time} -> {plane} inbound for landing")
            }
            Event::RequestTakeoff { time, plane } => {
                write!(f, "TIME: {time} -> {plane} ready for takeoff")
            }
            Event::Landing { time, plane, runway } => {
                let total = clearance_duration(plane.request, plane.size);
                write!(
                    f,
                    "TIME: {time} -> {plane} clear for landing on runway {runway} (time req. for landing: {total})"
                )
            }
            Event::Takeoff { time, plane, runway } => {
                let total = clearance_duration(plane.request, plane.size);
                write!(
                    f,
                    "TIME: {time} -> {plane} clear for takeoff on runway {runway} (time req. for takeoff: {total})"
                )
            }
            Event::Complete { time, plane, runway } => {
                write!(f, "TIME: {time} -> {plane} has cleared runway {runway}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn plane(kind: RequestKind, size: Size) -> Plane {
        Plane {
            atc_id: 1,
            call_sign: Arc::from("ACA101"),
            flight_number: 101,
            size,
            request: kind,
            request_time: Time(0),
        }
    }

    #[test]
    fn landing_needs_locate_time_on_top_of_takeoff() {
        for size in [Size::Small, Size::Large, Size::Heavy, Size::Super] {
            let landing = clearance_duration(RequestKind::Landing, size);
            let takeoff = clearance_duration(RequestKind::Takeoff, size);
            assert_eq!(landing, takeoff + LOCATE_TIME);
        }
        assert_eq!(clearance_duration(RequestKind::Landing, Size::Small), 3);
        assert_eq!(clearance_duration(RequestKind::Takeoff, Size::Small), 1);
    }

    #[test]
    fn clearance_duration_is_strictly_increasing_in_size() {
        for kind in [RequestKind::Landing, RequestKind::Takeoff] {
            let durations: Vec<u64> = [Size::Small, Size::Large, Size::Heavy, Size::Super]
                .into_iter()
                .map(|size| clearance_duration(kind, size))
                .collect();
            assert!(durations.windows(2).all(|w| w[0] < w[1]), "{durations:?}");
        }
    }

    #[test]
    fn request_and_action_variants_follow_the_plane() {
        let inbound = plane(RequestKind::Landing, Size::Small);
        assert!(matches!(Event::request(inbound.clone()), Event::RequestLanding { .. }));
        assert_eq!(Event::request(inbound.clone()).runway(), None);
        assert_eq!(Event::action(Time(5), inbound.clone(), 2).runway(), Some(2));
        assert_eq!(Event::complete(Time(5), inbound.clone(), 2).runway(), Some(2));
        assert!(matches!(
            Event::action(Time(5), inbound, 2),
            Event::Landing { runway: 2, .. }
        ));

        let outbound = plane(RequestKind::Takeoff, Size::Super);
        assert!(matches!(Event::request(outbound.clone()), Event::RequestTakeoff { .. }));
        assert!(matches!(
            Event::action(Time(5), outbound, 1),
            Event::Takeoff { runway: 1, .. }
        ));
    }

    #[test]
    fn log_lines_match_the_tower_templates() {
        let inbound = plane(RequestKind::Landing, Size::Heavy);
        let outbound = plane(RequestKind::Takeoff, Size::Small);

        assert_eq!(
            Event::request(inbound.clone()).to_string(),
            "TIME: 0 -> ACA101 101 (1) heavy inbound for landing"
        );
        assert_eq!(
            Event::request(outbound.clone()).to_string(),
            "TIME: 0 -> ACA101 101 (1) small ready for takeoff"
        );
        assert_eq!(
            Event::action(Time(4), inbound.clone(), 2).to_string(),
            "TIME: 4 -> ACA101 101 (1) heavy clear for landing on runway 2 (time req. for landing: 5)"
        );
        assert_eq!(
            Event::action(Time(4), outbound, 1).to_string(),
            "TIME: 4 -> ACA101 101 (1) small clear for takeoff on runway 1 (time req. for takeoff: 1)"
        );
        assert_eq!(
            Event::complete(Time(9), inbound, 2).to_string(),
            "TIME: 9 -> ACA101 101 (1) heavy has cleared runway 2"
        );
    }
}

use crate::error::SimError;
use crate::time::Time;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use std::sync::Arc;

/// Air Traffic Control ID, assigned ordinally as planes enter the simulation.
pub type AtcId = u32;

pub type CallSign = Arc<str>;

/// Plane size class. The discriminant doubles as the wake turbulence
/// duration in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Size {
    Small,
    Large,
    Heavy,
    Super,
}

impl Size {
    pub fn turbulence_minutes(self) -> u64 {
        self as u64
    }

    pub fn name(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Large => "large",
            Size::Heavy => "heavy",
            Size::Super => "super",
        }
    }
}

impl FromStr for Size {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Size::Small),
            "large" => Ok(Size::Large),
            "heavy" => Ok(Size::Heavy),
            "super" => Ok(Size::Super),
            _ => Err(SimError::UnknownToken(s.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the plane is asking the tower for. Landing requests outrank takeoff
/// requests everywhere priorities are compared, so `Landing` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RequestKind {
    Landing,
    Takeoff,
}

impl RequestKind {
    pub fn name(self) -> &'static str {
        match self {
            RequestKind::Landing => "landing",
            RequestKind::Takeoff => "takeoff",
        }
    }
}

impl FromStr for RequestKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing" => Ok(RequestKind::Landing),
            "takeoff" => Ok(RequestKind::Takeoff),
            _ => Err(SimError::UnknownToken(s.to_string())),
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single flight request. Immutable once constructed; copies of the same
/// plane move between the wait list and the event queue by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    pub atc_id: AtcId,
    pub call_sign: CallSign,
    pub flight_number: u32,
    pub size: Size,
    pub request: RequestKind,
    pub request_time: Time,
}

impl Plane {
    pub fn is_landing(&self) -> bool {
        self.request == RequestKind::Landing
    }

    pub fn is_takeoff(&self) -> bool {
        self.request == RequestKind::Takeoff
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.call_sign,
            self.flight_number,
            self.atc_id,
            self.size.name()
        )
    }
}

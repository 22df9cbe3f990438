use crate::error::SimError;
use crate::plane::{CallSign, RequestKind, Size};
use crate::time::Time;
use std::str::FromStr;
use std::sync::Arc;

/// One parsed line of the request stream:
///
///     <time> <callSign> <flightNumber> <size> <requestType>
///
/// Tokens past the fifth are ignored. The ATC ID is not part of the record;
/// the simulation assigns it when the plane is admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    pub time: Time,
    pub call_sign: CallSign,
    pub flight_number: u32,
    pub size: Size,
    pub kind: RequestKind,
}

impl FromStr for RequestRecord {
    type Err = SimError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || SimError::MalformedRecord(line.to_string());
        let mut tokens = line.split_whitespace();

        let time = tokens
            .next()
            .ok_or_else(malformed)?
            .parse::<u64>()
            .map_err(|_| malformed())?;
        let call_sign = tokens.next().ok_or_else(malformed)?;
        let flight_number = tokens
            .next()
            .ok_or_else(malformed)?
            .parse::<u32>()
            .map_err(|_| malformed())?;
        let size: Size = tokens.next().ok_or_else(malformed)?.parse()?;
        let kind: RequestKind = tokens.next().ok_or_else(malformed)?.parse()?;

        Ok(RequestRecord {
            time: Time(time),
            call_sign: Arc::from(call_sign),
            flight_number,
            size,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_record() {
        let record: RequestRecord = "15 WJA202 202 large takeoff".parse().unwrap();
        assert_eq!(
            record,
            RequestRecord {
                time: Time(15),
                call_sign: Arc::from("WJA202"),
                flight_number: 202,
                size: Size::Large,
                kind: RequestKind::Takeoff,
            }
        );
    }

    #[test]
    fn ignores_trailing_tokens() {
        let record: RequestRecord = "0 ACA1 1 small landing extra junk".parse().unwrap();
        assert_eq!(record.kind, RequestKind::Landing);
    }

    #[test]
    fn short_or_non_numeric_lines_are_malformed() {
        for line in ["", "5 ACA1 1 small", "five ACA1 1 small landing", "5 ACA1 x small landing"] {
            assert!(matches!(
                line.parse::<RequestRecord>(),
                Err(SimError::MalformedRecord(_))
            ));
        }
    }

    #[test]
    fn unknown_tokens_are_fatal() {
        assert!(matches!(
            "5 ACA1 1 tiny landing".parse::<RequestRecord>(),
            Err(SimError::UnknownToken(token)) if token == "tiny"
        ));
        assert!(matches!(
            "5 ACA1 1 small hover".parse::<RequestRecord>(),
            Err(SimError::UnknownToken(token)) if token == "hover"
        ));
    }
}

//! Compact gesture scripts such as `down:0,move:60,move:120,up`.
//!
//! Each step is `down:X`, `move:X`, `up`, `up:X` or `cancel`, where `X` is
//! an x coordinate relative to the widget's left edge. A bare `up` lifts at
//! the last position seen.

use std::fmt;
use std::str::FromStr;

/// One step of a scripted gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureStep {
    /// Finger down at local x
    Down(f32),
    /// Finger moved to local x
    Move(f32),
    /// Finger lifted, optionally at a given local x
    Up(Option<f32>),
    /// Platform cancelled the gesture
    Cancel,
}

/// Error parsing a gesture script.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GestureParseError {
    /// Step name is not one of down/move/up/cancel
    #[error("unknown gesture step '{0}'")]
    UnknownStep(String),
    /// Step requires an x coordinate
    #[error("gesture step '{0}' needs a coordinate, e.g. '{0}:40'")]
    MissingCoordinate(String),
    /// Coordinate is not a number
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),
}

impl GestureStep {
    /// Parse a comma separated script.
    pub fn parse_script(script: &str) -> Result<Vec<Self>, GestureParseError> {
        script
            .split(',')
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for GestureStep {
    type Err = GestureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, coord) = match s.split_once(':') {
            Some((name, coord)) => (name.trim(), Some(coord.trim())),
            None => (s.trim(), None),
        };
        let x = coord
            .map(|c| {
                c.parse::<f32>()
                    .map_err(|_| GestureParseError::InvalidCoordinate(c.to_string()))
            })
            .transpose()?;

        match name.to_ascii_lowercase().as_str() {
            "down" => x
                .map(Self::Down)
                .ok_or_else(|| GestureParseError::MissingCoordinate(name.to_string())),
            "move" => x
                .map(Self::Move)
                .ok_or_else(|| GestureParseError::MissingCoordinate(name.to_string())),
            "up" => Ok(Self::Up(x)),
            "cancel" => Ok(Self::Cancel),
            _ => Err(GestureParseError::UnknownStep(name.to_string())),
        }
    }
}

impl fmt::Display for GestureStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down(x) => write!(f, "down:{x}"),
            Self::Move(x) => write!(f, "move:{x}"),
            Self::Up(Some(x)) => write!(f, "up:{x}"),
            Self::Up(None) => f.write_str("up"),
            Self::Cancel => f.write_str("cancel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let steps = GestureStep::parse_script("down:0, move:60,move:120.5,up").unwrap();
        assert_eq!(
            steps,
            vec![
                GestureStep::Down(0.0),
                GestureStep::Move(60.0),
                GestureStep::Move(120.5),
                GestureStep::Up(None),
            ]
        );
    }

    #[test]
    fn test_parse_up_with_coordinate_and_cancel() {
        assert_eq!("up:30".parse(), Ok(GestureStep::Up(Some(30.0))));
        assert_eq!("CANCEL".parse(), Ok(GestureStep::Cancel));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "down".parse::<GestureStep>(),
            Err(GestureParseError::MissingCoordinate("down".to_string()))
        );
        assert_eq!(
            "move:abc".parse::<GestureStep>(),
            Err(GestureParseError::InvalidCoordinate("abc".to_string()))
        );
        assert_eq!(
            "tap:3".parse::<GestureStep>(),
            Err(GestureParseError::UnknownStep("tap".to_string()))
        );
    }

    #[test]
    fn test_empty_steps_skipped() {
        assert_eq!(GestureStep::parse_script("").unwrap(), vec![]);
        assert_eq!(
            GestureStep::parse_script("down:1,,up").unwrap().len(),
            2
        );
    }

    #[test]
    fn test_display_reparses() {
        for step in [
            GestureStep::Down(1.5),
            GestureStep::Move(-2.0),
            GestureStep::Up(None),
            GestureStep::Up(Some(4.0)),
            GestureStep::Cancel,
        ] {
            assert_eq!(step.to_string().parse(), Ok(step));
        }
    }
}

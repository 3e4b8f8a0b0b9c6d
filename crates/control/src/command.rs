//! Text control messages
//!
//! Messages have the form `command:value`, with comma separated numbers in
//! the value. They arrive one per line and change the live scene or the
//! camera between frames:
//!
//! | message | effect |
//! |---|---|
//! | `add_primitive:kind,x,y,z,size[,r,g,b]` | append a sphere (`0`) or cube (`1`) |
//! | `change_blend_strength:value` | blend strength for later primitives |
//! | `move_camera:forward,right,up` | translate the camera in its own frame |
//! | `rotate_camera:yaw,pitch` | turn the camera, radians |

use std::str::FromStr;

use render::{Camera, SceneStore};
use sdf::{PrimitiveKind, Vec3, DEFAULT_COLOR};
use tracing::debug;

use crate::error::ControlError;

const ADD_PRIMITIVE: &str = "add_primitive";
const CHANGE_BLEND_STRENGTH: &str = "change_blend_strength";
const MOVE_CAMERA: &str = "move_camera";
const ROTATE_CAMERA: &str = "rotate_camera";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    AddPrimitive {
        kind: PrimitiveKind,
        position: Vec3,
        /// Radius for spheres, edge length for cubes.
        size: f32,
        color: Vec3,
    },
    ChangeBlendStrength(f32),
    MoveCamera {
        forward: f32,
        right: f32,
        up: f32,
    },
    RotateCamera {
        yaw: f32,
        pitch: f32,
    },
}

impl FromStr for Command {
    type Err = ControlError;

    fn from_str(message: &str) -> Result<Self, Self::Err> {
        let message = message.trim();
        let (name, value) = message
            .split_once(':')
            .ok_or_else(|| ControlError::Malformed(message.to_string()))?;

        match name.trim() {
            ADD_PRIMITIVE => parse_add_primitive(value),
            CHANGE_BLEND_STRENGTH => {
                let [strength] = parse_numbers::<1>(CHANGE_BLEND_STRENGTH, value)?;
                Ok(Self::ChangeBlendStrength(strength))
            }
            MOVE_CAMERA => {
                let [forward, right, up] = parse_numbers::<3>(MOVE_CAMERA, value)?;
                Ok(Self::MoveCamera { forward, right, up })
            }
            ROTATE_CAMERA => {
                let [yaw, pitch] = parse_numbers::<2>(ROTATE_CAMERA, value)?;
                Ok(Self::RotateCamera { yaw, pitch })
            }
            other => Err(ControlError::UnknownCommand(other.to_string())),
        }
    }
}

impl Command {
    /// Applies the command to the shared scene or the caller's camera.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Scene`] when the primitive is invalid or the
    /// scene is already full. The scene is unchanged in both cases.
    pub fn apply(&self, store: &SceneStore, camera: &mut Camera) -> Result<(), ControlError> {
        match *self {
            Self::AddPrimitive {
                kind,
                position,
                size,
                color,
            } => {
                store.add_primitive(kind, position, size, color)?;
            }
            Self::ChangeBlendStrength(strength) => store.set_blend_strength(strength),
            Self::MoveCamera { forward, right, up } => {
                camera.translate(forward, right, up);
                debug!(eye = ?camera.eye, "camera moved");
            }
            Self::RotateCamera { yaw, pitch } => {
                camera.look(yaw, pitch);
                debug!(yaw = camera.yaw, pitch = camera.pitch, "camera rotated");
            }
        }
        Ok(())
    }
}

fn parse_add_primitive(value: &str) -> Result<Command, ControlError> {
    let fields: Vec<&str> = value.split(',').map(str::trim).collect();
    if fields.len() != 5 && fields.len() != 8 {
        return Err(ControlError::InvalidArgument {
            command: ADD_PRIMITIVE,
            reason: format!("expected 5 or 8 values, got {}", fields.len()),
        });
    }

    let kind = parse_kind(fields[0])?;
    let numbers = fields[1..]
        .iter()
        .map(|field| parse_number(ADD_PRIMITIVE, field))
        .collect::<Result<Vec<f32>, _>>()?;
    let color = if numbers.len() == 7 {
        Vec3::new(numbers[4], numbers[5], numbers[6])
    } else {
        DEFAULT_COLOR
    };

    Ok(Command::AddPrimitive {
        kind,
        position: Vec3::new(numbers[0], numbers[1], numbers[2]),
        size: numbers[3],
        color,
    })
}

/// Accepts a kind by name or by numeric code; fractional codes are
/// truncated, so `1.0` is a cube.
fn parse_kind(field: &str) -> Result<PrimitiveKind, ControlError> {
    match field.to_ascii_lowercase().as_str() {
        "sphere" => return Ok(PrimitiveKind::Sphere),
        "cube" => return Ok(PrimitiveKind::Cube),
        _ => {}
    }
    let code = parse_number(ADD_PRIMITIVE, field)?.trunc();
    if code.abs() < f32::EPSILON {
        Ok(PrimitiveKind::Sphere)
    } else if (code - 1.0).abs() < f32::EPSILON {
        Ok(PrimitiveKind::Cube)
    } else {
        Err(ControlError::InvalidArgument {
            command: ADD_PRIMITIVE,
            reason: format!("unknown primitive kind {field:?}"),
        })
    }
}

fn parse_numbers<const N: usize>(
    command: &'static str,
    value: &str,
) -> Result<[f32; N], ControlError> {
    let numbers = value
        .split(',')
        .map(|field| parse_number(command, field))
        .collect::<Result<Vec<f32>, _>>()?;
    numbers
        .try_into()
        .map_err(|numbers: Vec<f32>| ControlError::InvalidArgument {
            command,
            reason: format!("expected {N} value(s), got {}", numbers.len()),
        })
}

fn parse_number(command: &'static str, field: &str) -> Result<f32, ControlError> {
    let field = field.trim();
    let number: f32 = field.parse().map_err(|_| ControlError::InvalidArgument {
        command,
        reason: format!("{field:?} is not a number"),
    })?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(ControlError::InvalidArgument {
            command,
            reason: format!("{field:?} is not finite"),
        })
    }
}

//! Small helpers shared by the brightness and control layers.

/// Clamp `value` into the closed interval `[minimum, maximum]`.
///
/// Works for every [PartialOrd] type, including floats. `minimum` must not be
/// greater than `maximum`.
pub fn normalize<T: PartialOrd>(value: T, minimum: T, maximum: T) -> T {
    if value < minimum {
        minimum
    } else if value > maximum {
        maximum
    } else {
        value
    }
}

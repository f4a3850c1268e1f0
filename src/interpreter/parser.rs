/// Parser entry point and shared result type.
pub mod core;

/// Expression parsing.
///
/// Converts the infix token span of one expression into reverse-Polish order
/// with the shunting-yard algorithm, validating operand placement and
/// parenthesis balance along the way.
pub mod shunting_yard;

/// Statement recognition.
///
/// Matches assignments, constant declarations and print statements at the
/// cursor and decides how far each statement's expression reaches.
pub mod statement;

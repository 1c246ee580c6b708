use crate::input::InputValue;

/// One value per line. Blank lines are kept so strict mode can report them.
pub fn parse(content: &str) -> Vec<InputValue> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| InputValue::text(line, index + 1))
        .collect()
}

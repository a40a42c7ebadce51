use crate::error::{Result, TuduError};
use crate::model::Todo;

/// Resolve a raw position token against the current enumeration.
///
/// The token must parse as a base-10 integer with `1 <= position <= count`;
/// anything else (non-numeric, zero, negative, out of range) is an
/// `InvalidIndex` error carrying the raw token. Update, delete, and complete
/// all go through here so the check is identical across the three.
pub fn resolve_position<'a>(todos: &'a [Todo], token: &str) -> Result<(usize, &'a Todo)> {
    let position: usize = token
        .trim()
        .parse()
        .map_err(|_| TuduError::InvalidIndex(token.to_string()))?;
    if position == 0 || position > todos.len() {
        return Err(TuduError::InvalidIndex(token.to_string()));
    }
    Ok((position, &todos[position - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: usize) -> Vec<Todo> {
        (0..count).map(|i| Todo::new(format!("todo {}", i))).collect()
    }

    #[test]
    fn resolves_first_and_last() {
        let todos = sample(3);
        let (pos, todo) = resolve_position(&todos, "1").unwrap();
        assert_eq!(pos, 1);
        assert_eq!(todo.id, todos[0].id);

        let (pos, todo) = resolve_position(&todos, "3").unwrap();
        assert_eq!(pos, 3);
        assert_eq!(todo.id, todos[2].id);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let todos = sample(2);
        let (pos, _) = resolve_position(&todos, " 2 ").unwrap();
        assert_eq!(pos, 2);
    }

    #[test]
    fn rejects_out_of_range_and_non_numeric() {
        let todos = sample(3);
        for token in ["0", "4", "-1", "abc", "", "1.5"] {
            let err = resolve_position(&todos, token).unwrap_err();
            assert!(
                matches!(err, TuduError::InvalidIndex(ref t) if t == token),
                "token {:?} should be an invalid index",
                token
            );
        }
    }

    #[test]
    fn rejects_any_position_on_empty_collection() {
        let err = resolve_position(&[], "1").unwrap_err();
        assert!(matches!(err, TuduError::InvalidIndex(_)));
    }
}

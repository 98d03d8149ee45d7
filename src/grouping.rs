//! Grouping Utilities
//!
//! Helper functions for arranging todos under their groups for display.

use std::collections::HashMap;

use crate::models::{Group, Todo};

/// Partition todos by owning group, ordered by position within each group.
///
/// Every group id appears as a key (an empty group maps to an empty list).
/// Todos whose `group_id` matches no group are dropped from the result.
/// Ordering for equal positions follows input order.
pub fn todos_by_group(groups: &[Group], todos: &[Todo]) -> HashMap<u32, Vec<Todo>> {
    let mut by_group: HashMap<u32, Vec<Todo>> =
        groups.iter().map(|group| (group.id, Vec::new())).collect();

    for todo in todos {
        if let Some(bucket) = by_group.get_mut(&todo.group_id) {
            bucket.push(todo.clone());
        }
    }

    for bucket in by_group.values_mut() {
        bucket.sort_by_key(|todo| todo.position);
    }

    by_group
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_group(id: u32, position: i32) -> Group {
        Group {
            id,
            name: format!("Group {}", id),
            position,
            is_opened: true,
        }
    }

    fn make_todo(text: &str, position: i32, group_id: u32) -> Todo {
        let t = Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        Todo {
            text: text.to_string(),
            position,
            created_at: t,
            updated_at: t,
            is_done: false,
            group_id,
        }
    }

    #[test]
    fn partitions_by_group_and_orders_by_position() {
        let groups = vec![make_group(2, 1), make_group(3, 2)];
        let todos = vec![
            make_todo("a", 1, 2),
            make_todo("b", 2, 2),
            make_todo("c", 1, 3),
        ];

        let grouped = todos_by_group(&groups, &todos);

        assert_eq!(grouped.len(), 2);
        let g2: Vec<_> = grouped[&2].iter().map(|t| t.text.as_str()).collect();
        assert_eq!(g2, vec!["a", "b"]);
        let g3: Vec<_> = grouped[&3].iter().map(|t| t.text.as_str()).collect();
        assert_eq!(g3, vec!["c"]);
    }

    #[test]
    fn orders_within_group_ascending_by_position() {
        let groups = vec![make_group(1, 1)];
        let todos = vec![
            make_todo("third", 30, 1),
            make_todo("first", 10, 1),
            make_todo("second", 20, 1),
        ];

        let grouped = todos_by_group(&groups, &todos);

        let texts: Vec<_> = grouped[&1].iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn equal_positions_keep_input_order() {
        let groups = vec![make_group(1, 1)];
        let todos = vec![
            make_todo("earlier", 5, 1),
            make_todo("later", 5, 1),
        ];

        let grouped = todos_by_group(&groups, &todos);

        let texts: Vec<_> = grouped[&1].iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["earlier", "later"]);
    }

    #[test]
    fn drops_todos_with_unmatched_group() {
        let groups = vec![make_group(1, 1)];
        let todos = vec![make_todo("kept", 1, 1), make_todo("orphan", 2, 99)];

        let grouped = todos_by_group(&groups, &todos);

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, 1);
        assert!(grouped.values().all(|b| b.iter().all(|t| t.text != "orphan")));
    }

    #[test]
    fn no_todo_duplicated_across_groups() {
        let groups = vec![make_group(1, 1), make_group(2, 2)];
        let todos = vec![
            make_todo("a", 1, 1),
            make_todo("b", 2, 1),
            make_todo("c", 1, 2),
        ];

        let grouped = todos_by_group(&groups, &todos);

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, todos.len());
    }

    #[test]
    fn empty_input_yields_empty_buckets() {
        let groups = vec![make_group(1, 1)];
        let grouped = todos_by_group(&groups, &[]);
        assert_eq!(grouped.len(), 1);
        assert!(grouped[&1].is_empty());

        let grouped = todos_by_group(&[], &[]);
        assert!(grouped.is_empty());
    }
}

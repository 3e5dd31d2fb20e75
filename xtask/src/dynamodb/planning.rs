//! Pure functions for calculating deployment plans (Functional Core).

use super::config::{KeyAttribute, TableConfig};

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    /// Partition key attribute as described by DynamoDB.
    pub partition_key: Option<KeyAttribute>,
    /// Sort key attribute as described by DynamoDB.
    pub sort_key: Option<KeyAttribute>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists with the expected key schema.
    NoChanges { table_name: String },
    /// Table exists but its keys differ. Key schemas cannot be altered in place.
    KeyMismatch {
        table_name: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

fn describe_key(role: &str, key: Option<&KeyAttribute>) -> String {
    match key {
        Some(key) => format!("{role}: {} ({})", key.name, key.attribute_type.descriptor()),
        None => format!("{role}: <none>"),
    }
}

/// Calculate what changes are needed to reach the desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    let partition_matches = state.partition_key.as_ref() == Some(&desired.partition_key);
    let sort_matches = state.sort_key.as_ref() == Some(&desired.sort_key);

    if partition_matches && sort_matches {
        DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else {
        DeployPlan::KeyMismatch {
            table_name: desired.table_name.clone(),
            expected: vec![
                describe_key("Partition key", Some(&desired.partition_key)),
                describe_key("Sort key", Some(&desired.sort_key)),
            ],
            actual: vec![
                describe_key("Partition key", state.partition_key.as_ref()),
                describe_key("Sort key", state.sort_key.as_ref()),
            ],
        }
    }
}

/// Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  {}", describe_key("Partition key", Some(&config.partition_key))),
            format!("  {}", describe_key("Sort key", Some(&config.sort_key))),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            actual,
        } => {
            let mut lines = vec![format!("! Table '{}' has an unexpected key schema", table_name)];
            lines.extend(expected.iter().map(|line| format!("  expected {line}")));
            lines.extend(actual.iter().map(|line| format!("  found    {line}")));
            lines
        }
    }
}

/// Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::{movies_table_config, AttributeType};
    use super::*;

    fn active_state(partition: KeyAttribute, sort: Option<KeyAttribute>) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: Some(partition),
            sort_key: sort,
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = movies_table_config();
        let plan = calculate_deploy_plan(None, &desired);
        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let desired = movies_table_config();
        let state = active_state(
            desired.partition_key.clone(),
            Some(desired.sort_key.clone()),
        );

        let plan = calculate_deploy_plan(Some(&state), &desired);
        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "movies".to_string()
            }
        );
    }

    #[test]
    fn test_string_year_is_a_key_mismatch() {
        let desired = movies_table_config();
        let state = active_state(
            KeyAttribute {
                name: "year".to_string(),
                attribute_type: AttributeType::String,
            },
            Some(desired.sort_key.clone()),
        );

        let DeployPlan::KeyMismatch {
            expected, actual, ..
        } = calculate_deploy_plan(Some(&state), &desired)
        else {
            panic!("expected a key mismatch");
        };
        assert_eq!(expected[0], "Partition key: year (N)");
        assert_eq!(actual[0], "Partition key: year (S)");
    }

    #[test]
    fn test_missing_sort_key_is_a_key_mismatch() {
        let desired = movies_table_config();
        let state = active_state(desired.partition_key.clone(), None);

        let plan = calculate_deploy_plan(Some(&state), &desired);
        let lines = format_deploy_plan(&plan);
        assert!(lines[0].starts_with('!'));
        assert!(lines.contains(&"  found    Sort key: <none>".to_string()));
    }

    #[test]
    fn test_create_plan_lists_keys() {
        let plan = calculate_deploy_plan(None, &movies_table_config().with_table_name("films"));
        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: films".to_string(),
                "  Partition key: year (N)".to_string(),
                "  Sort key: title (S)".to_string(),
                "  Billing: PAY_PER_REQUEST".to_string(),
            ]
        );
    }

    #[test]
    fn test_destroy_plan() {
        let state = active_state(movies_table_config().partition_key, None);
        assert_eq!(
            calculate_destroy_plan(Some(&state), "movies"),
            DestroyPlan::DeleteTable {
                table_name: "movies".to_string()
            }
        );
        assert_eq!(
            format_destroy_plan(&calculate_destroy_plan(None, "movies")),
            vec!["= Table 'movies' does not exist".to_string()]
        );
    }
}

//! Defines the savings goal model used by the dashboard goal widget.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Alias for the ID type assigned to goals by a store.
pub type GoalId = i64;

/// A savings goal tracked on the dashboard.
///
/// To create a new `Goal`, use [Goal::build] and pass the builder to a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The ID of the goal, assigned by the store it was created in.
    pub id: GoalId,
    /// The target amount to save.
    #[serde(rename = "goal")]
    pub target: f64,
    /// A text description of what the goal is for.
    pub description: String,
    /// Days remaining until the goal's deadline.
    #[serde(rename = "deadline")]
    pub deadline_days: i64,
    /// Whether the goal has been reached.
    pub completed: bool,
}

impl Goal {
    /// Create a new goal.
    ///
    /// Shortcut for [GoalBuilder] for discoverability.
    pub fn build(target: f64, description: &str, deadline_days: i64) -> GoalBuilder {
        GoalBuilder {
            target,
            description: description.to_owned(),
            deadline_days,
            completed: false,
        }
    }
}

/// A goal that has not been admitted into a store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalBuilder {
    /// The target amount to save.
    pub target: f64,
    /// A text description of what the goal is for.
    pub description: String,
    /// Days remaining until the goal's deadline.
    pub deadline_days: i64,
    /// Whether the goal has been reached. Defaults to `false`.
    pub completed: bool,
}

impl GoalBuilder {
    /// Set whether the goal has been reached.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Check that the builder describes a well-formed goal.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the target is negative or not finite,
    /// - or [Error::EmptyDescription] if the description is blank.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.target.is_finite() || self.target < 0.0 {
            return Err(Error::InvalidAmount(self.target));
        }

        if self.description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(())
    }

    /// Attach a store-assigned ID to produce the final record.
    pub(crate) fn into_goal(self, id: GoalId) -> Goal {
        Goal {
            id,
            target: self.target,
            description: self.description,
            deadline_days: self.deadline_days,
            completed: self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::Goal;

    #[test]
    fn validate_accepts_well_formed_goal() {
        let builder = Goal::build(5000.0, "Emergency fund", 90);

        assert_eq!(builder.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_target() {
        let builder = Goal::build(-5000.0, "Emergency fund", 90);

        assert_eq!(builder.validate(), Err(Error::InvalidAmount(-5000.0)));
    }

    #[test]
    fn validate_rejects_blank_description() {
        let builder = Goal::build(5000.0, "", 90);

        assert_eq!(builder.validate(), Err(Error::EmptyDescription));
    }

    #[test]
    fn goal_serializes_with_legacy_field_names() {
        let goal = Goal::build(5000.0, "Emergency fund", 90)
            .completed(true)
            .into_goal(7);

        let json = serde_json::to_value(&goal).unwrap();

        assert_eq!(json["goal"], 5000.0);
        assert_eq!(json["deadline"], 90);
        assert_eq!(json["completed"], true);
    }
}

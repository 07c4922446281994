/// The fixed set of hard constraints enforced by the consistency check.
///
/// This set is not configurable: every member is always active. It is enumerated so that
/// validation reports and tests can name the constraint a solution violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardConstraint {
    /// A teacher cannot teach two course hours in the same time slot.
    TeacherConflict,
    /// A room cannot host two course hours in the same time slot.
    RoomConflict,
    /// A student class cannot attend two course hours in the same time slot.
    ClassConflict,
    /// A room must hold at least as many students as the course enrols.
    RoomCapacity,
}

impl HardConstraint {
    /// All members of the catalog.
    pub fn all() -> [HardConstraint; 4] {
        [
            HardConstraint::TeacherConflict,
            HardConstraint::RoomConflict,
            HardConstraint::ClassConflict,
            HardConstraint::RoomCapacity,
        ]
    }
}

/// The kinds of soft constraints the catalog can carry.
///
/// Soft constraints never influence feasibility; they are consulted only to rank the solutions
/// accumulated when more than one solution is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftConstraintKind {
    /// Prefer slots from the teacher's preferred-slot list.
    TeacherPreference,
    /// Prefer rooms whose capacity closely fits the course's enrolment.
    RoomCapacityFit,
    /// Prefer spreading the hours of one course over distinct days.
    Continuity,
    /// Prefer teachers not teaching long runs of consecutive periods.
    BreakSpacing,
}

/// A named soft constraint with a weight in the ranking objective.
#[derive(Debug, Clone)]
pub struct SoftConstraint {
    pub kind: SoftConstraintKind,
    /// Relative importance of this constraint when ranking solutions.
    pub weight: f64,
    /// Disabled constraints contribute no penalty but remain listed.
    pub enabled: bool,
}

impl SoftConstraint {
    pub fn new(kind: SoftConstraintKind, weight: f64) -> Self {
        SoftConstraint {
            kind,
            weight,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// The constraint catalog: the fixed hard-constraint set plus the weighted soft constraints.
#[derive(Debug, Clone)]
pub struct ConstraintCatalog {
    pub soft_constraints: Vec<SoftConstraint>,
}

impl ConstraintCatalog {
    /// A catalog with no soft constraints; solutions are then ranked as equals.
    pub fn empty() -> Self {
        ConstraintCatalog {
            soft_constraints: Vec::new(),
        }
    }

    pub fn with_soft_constraint(mut self, constraint: SoftConstraint) -> Self {
        self.soft_constraints.push(constraint);
        self
    }
}

impl Default for ConstraintCatalog {
    fn default() -> Self {
        ConstraintCatalog {
            soft_constraints: vec![
                SoftConstraint::new(SoftConstraintKind::TeacherPreference, 1.0),
                SoftConstraint::new(SoftConstraintKind::RoomCapacityFit, 0.5),
                SoftConstraint::new(SoftConstraintKind::Continuity, 0.8),
                SoftConstraint::new(SoftConstraintKind::BreakSpacing, 0.3),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_hard_constraint_set_is_fixed() {
        assert_eq!(HardConstraint::all().len(), 4);
    }

    #[test]
    fn the_default_catalog_enables_every_soft_constraint() {
        let catalog = ConstraintCatalog::default();
        assert_eq!(catalog.soft_constraints.len(), 4);
        assert!(catalog.soft_constraints.iter().all(|soft| soft.enabled));
    }
}

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::evaluation::SolutionEvaluator;
use super::nogood_store::NogoodStore;
use super::restart_strategy::RestartStrategy;
use super::termination::AbortReason;
use super::termination::Combinator;
use super::termination::FailureBudget;
use super::termination::NodeBudget;
use super::termination::TerminationCondition;
use super::termination::TimeBudget;
use super::ConstraintChecker;
use super::SearchState;
use crate::basic_types::SearchStatistics;
use crate::basic_types::Solution;
use crate::branching::value_selection;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection;
use crate::branching::variable_selection::Randomised;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::model::TimetableInstance;
use crate::options::SearchConfig;
use crate::options::SearchStrategy;
use crate::propagators;
use crate::propagators::Propagator;
use crate::variables::CourseHourId;
use crate::variables::VariableStore;

/// The conclusion of one engine run.
#[derive(Debug)]
pub(crate) enum SearchOutcome {
    /// A complete consistent assignment; with multiple requested solutions, the best-ranked
    /// one under the soft constraints.
    Feasible(Solution),
    /// The search space was exhausted without a solution. This is a proof.
    Infeasible,
    /// A budget ran out; feasibility remains unknown.
    Aborted(AbortReason),
}

/// The verdict a branch reports to its parent.
enum BranchResult {
    /// Enough solutions were found; unwind and conclude.
    Solved,
    /// The branch is fully explored. The conflict set names the assigned variables whose
    /// values contributed to the failure; backjumping skips choice points absent from it.
    Exhausted(Vec<CourseHourId>),
    /// A budget ran out mid-branch.
    Aborted(AbortReason),
    /// The restart threshold was reached; unwind to the root and start over.
    Restart,
}

type Budgets = Combinator<TimeBudget, Combinator<NodeBudget, FailureBudget>>;

/// The depth-first backtracking core and its frontier-based variants.
///
/// One engine performs exactly one run: it owns the statistics, the seeded random generator,
/// and the policy objects instantiated from the configuration. The search tree is explored by
/// a single logical thread of control; sibling branches own independent state copies and are
/// never live at the same time.
pub(crate) struct SearchEngine<'a> {
    instance: &'a TimetableInstance,
    store: &'a VariableStore,
    config: &'a SearchConfig,
    checker: ConstraintChecker<'a>,

    variable_selector: Box<dyn VariableSelector>,
    value_selector: Box<dyn ValueSelector>,
    propagator: Box<dyn Propagator>,
    termination: Budgets,
    random: SmallRng,

    statistics: SearchStatistics,
    solutions: Vec<Solution>,
    nogoods: NogoodStore,
    restart: Option<RestartStrategy>,

    /// Set for the depth-limited strategies; [`None`] leaves only the abort-level depth check.
    depth_limit: Option<usize>,
    /// Whether the current sweep cut at least one branch at the depth limit, which downgrades
    /// an exhausted sweep from a proof to an inconclusive result.
    depth_cutoff: bool,
    /// Backjumping and learning are sound only for first-solution depth-first search; the
    /// flags cache that eligibility check.
    backjumping: bool,
    learning: bool,
}

impl<'a> SearchEngine<'a> {
    pub(crate) fn new(
        instance: &'a TimetableInstance,
        store: &'a VariableStore,
        config: &'a SearchConfig,
    ) -> Self {
        let mut variable_selector =
            variable_selection::create(config.variable_selection, config.tie_breaking);
        if config.enable_randomization {
            variable_selector = Box::new(Randomised::new(
                variable_selector,
                config.randomization_probability,
            ));
        }

        let termination = Combinator::new(
            TimeBudget::starting_now(config.max_search_time),
            Combinator::new(
                NodeBudget::new(config.max_nodes),
                FailureBudget::new(config.max_failures),
            ),
        );

        // The depth-first refinements require chronological exploration of a single tree:
        // with several requested solutions or a frontier discipline they are unsound.
        let refinements_apply =
            config.search_strategy == SearchStrategy::DepthFirst && config.max_solutions == 1;

        SearchEngine {
            instance,
            store,
            config,
            checker: ConstraintChecker::new(instance, store),
            variable_selector,
            value_selector: value_selection::create(config.value_selection, config.tie_breaking),
            propagator: propagators::create(config.effective_propagation()),
            termination,
            random: SmallRng::seed_from_u64(config.random_seed),
            statistics: SearchStatistics::default(),
            solutions: Vec::new(),
            nogoods: NogoodStore::new(config.max_learned_nogoods),
            restart: (config.enable_restart && refinements_apply)
                .then(|| RestartStrategy::new(config.restart_interval)),
            depth_limit: None,
            depth_cutoff: false,
            backjumping: config.enable_backjumping && refinements_apply,
            learning: config.enable_learning && refinements_apply,
        }
    }

    /// Runs the configured search strategy to its conclusion.
    pub(crate) fn solve(mut self) -> (SearchOutcome, SearchStatistics) {
        let outcome = match self.config.search_strategy {
            SearchStrategy::DepthFirst => self.solve_depth_first(),
            SearchStrategy::DepthLimited => self.solve_depth_limited(),
            SearchStrategy::IterativeDeepening => self.solve_iterative_deepening(),
            SearchStrategy::BreadthFirst => self.solve_breadth_first(),
        };
        (outcome, self.statistics)
    }

    /// Builds the root state and prunes it once; a wipeout here is already a proof.
    fn propagated_root(&mut self) -> Result<SearchState, SearchOutcome> {
        let mut root = SearchState::root(self.store);
        if self
            .propagator
            .propagate(&mut root, &self.checker, None)
            .is_wipeout()
        {
            self.statistics.propagation_failures += 1;
            return Err(SearchOutcome::Infeasible);
        }
        Ok(root)
    }

    fn solve_depth_first(&mut self) -> SearchOutcome {
        let root = match self.propagated_root() {
            Ok(root) => root,
            Err(outcome) => return outcome,
        };

        loop {
            match self.search(root.branch(), 0) {
                BranchResult::Solved | BranchResult::Exhausted(_) => return self.conclude(),
                BranchResult::Aborted(reason) => return SearchOutcome::Aborted(reason),
                BranchResult::Restart => {
                    self.statistics.restarts += 1;
                    if let Some(strategy) = &mut self.restart {
                        strategy.notify_restart();
                    }
                }
            }
        }
    }

    fn solve_depth_limited(&mut self) -> SearchOutcome {
        let root = match self.propagated_root() {
            Ok(root) => root,
            Err(outcome) => return outcome,
        };

        self.depth_limit = Some(self.config.max_search_depth);
        self.depth_cutoff = false;

        match self.search(root.branch(), 0) {
            BranchResult::Solved => self.conclude(),
            BranchResult::Aborted(reason) => SearchOutcome::Aborted(reason),
            BranchResult::Restart => unreachable!("restarts only apply to plain depth-first search"),
            BranchResult::Exhausted(_) => {
                if self.solutions.is_empty() && self.depth_cutoff {
                    // At least one branch was cut, so exhaustion proves nothing.
                    SearchOutcome::Aborted(AbortReason::DepthLimit)
                } else {
                    self.conclude()
                }
            }
        }
    }

    fn solve_iterative_deepening(&mut self) -> SearchOutcome {
        let root = match self.propagated_root() {
            Ok(root) => root,
            Err(outcome) => return outcome,
        };

        let deepest = self.config.max_search_depth.min(self.store.num_variables());
        for limit in 0..=deepest {
            self.depth_limit = Some(limit);
            self.depth_cutoff = false;

            match self.search(root.branch(), 0) {
                BranchResult::Solved => return self.conclude(),
                BranchResult::Aborted(reason) => return SearchOutcome::Aborted(reason),
                BranchResult::Restart => {
                    unreachable!("restarts only apply to plain depth-first search")
                }
                BranchResult::Exhausted(_) => {
                    if !self.depth_cutoff {
                        // The sweep ran to completion without ever hitting the limit.
                        return self.conclude();
                    }
                }
            }
        }

        if self.solutions.is_empty() {
            SearchOutcome::Aborted(AbortReason::DepthLimit)
        } else {
            self.conclude()
        }
    }

    /// The depth-first step: select a variable, order its values, and for each value check
    /// consistency, branch into a copied state, propagate, and recurse.
    fn search(&mut self, state: SearchState, depth: usize) -> BranchResult {
        self.statistics.nodes_visited += 1;

        if depth > self.config.max_search_depth {
            return BranchResult::Aborted(AbortReason::DepthLimit);
        }
        if let Some(reason) = self.termination.should_stop(&self.statistics) {
            return BranchResult::Aborted(reason);
        }

        if state.is_complete() {
            return self.record_solution(state);
        }

        if let Some(limit) = self.depth_limit {
            if depth >= limit {
                self.depth_cutoff = true;
                return BranchResult::Exhausted(assigned_variables(&state, self.store));
            }
        }

        let selected = {
            let mut context =
                SelectionContext::new(&state, self.store, &self.checker, &mut self.random);
            self.variable_selector.select_variable(&mut context)
        };
        let Some(variable) = selected else {
            // The selector contract permits this only with an empty unassigned set, which
            // completeness already covered.
            return BranchResult::Exhausted(Vec::new());
        };
        debug_assert!(!state.domain(variable).is_empty());

        let values = {
            let mut context =
                SelectionContext::new(&state, self.store, &self.checker, &mut self.random);
            self.value_selector.order_values(&mut context, variable)
        };

        let mut conflicts: Vec<CourseHourId> = Vec::new();

        for candidate in values {
            self.statistics.assignments_tried += 1;

            if self.learning && self.nogoods.forbids(variable, candidate, &state) {
                self.statistics.consistency_check_failures += 1;
                merge_conflicts(&mut conflicts, assigned_variables(&state, self.store), variable);
                if self.failure_noted_triggers_restart() {
                    return BranchResult::Restart;
                }
                continue;
            }

            match self.checker.is_consistent(variable, candidate, &state) {
                Err(conflicting) => {
                    self.statistics.consistency_check_failures += 1;
                    merge_conflicts(&mut conflicts, conflicting, variable);
                    if self.failure_noted_triggers_restart() {
                        return BranchResult::Restart;
                    }
                    continue;
                }
                Ok(()) => {}
            }

            let mut child = state.branch();
            child.assign(variable, candidate);

            if self
                .propagator
                .propagate(&mut child, &self.checker, Some(variable))
                .is_wipeout()
            {
                self.statistics.propagation_failures += 1;
                // Propagation does not attribute removals, so every assigned variable may be
                // responsible for the wipeout.
                merge_conflicts(&mut conflicts, assigned_variables(&state, self.store), variable);
                if self.failure_noted_triggers_restart() {
                    return BranchResult::Restart;
                }
                continue;
            }

            match self.search(child, depth + 1) {
                BranchResult::Solved => return BranchResult::Solved,
                BranchResult::Aborted(reason) => return BranchResult::Aborted(reason),
                BranchResult::Restart => return BranchResult::Restart,
                BranchResult::Exhausted(child_conflicts) => {
                    if self.backjumping && !child_conflicts.contains(&variable) {
                        // The subtree failed independently of this choice point; trying the
                        // remaining values would fail identically.
                        self.statistics.backtracks += 1;
                        return BranchResult::Exhausted(child_conflicts);
                    }
                    merge_conflicts(&mut conflicts, child_conflicts, variable);
                }
            }
        }

        self.statistics.backtracks += 1;
        if self.learning && self.nogoods.record(&conflicts, &state) {
            self.statistics.learned_nogoods += 1;
        }
        BranchResult::Exhausted(conflicts)
    }

    /// Breadth-first exploration with an explicit frontier of copied states. Budgets and the
    /// consistency/propagation contracts are identical to the depth-first step; the
    /// depth-first refinements (backjumping, learning, restarts) do not apply.
    fn solve_breadth_first(&mut self) -> SearchOutcome {
        let root = match self.propagated_root() {
            Ok(root) => root,
            Err(outcome) => return outcome,
        };

        let mut frontier: VecDeque<(SearchState, usize)> = VecDeque::new();
        frontier.push_back((root, 0));

        while let Some((state, depth)) = frontier.pop_front() {
            self.statistics.nodes_visited += 1;

            if depth > self.config.max_search_depth {
                return SearchOutcome::Aborted(AbortReason::DepthLimit);
            }
            if let Some(reason) = self.termination.should_stop(&self.statistics) {
                return SearchOutcome::Aborted(reason);
            }

            if state.is_complete() {
                self.statistics.solutions_found += 1;
                self.solutions.push(state.into_solution());
                if self.solutions.len() >= self.config.max_solutions {
                    break;
                }
                continue;
            }

            let selected = {
                let mut context =
                    SelectionContext::new(&state, self.store, &self.checker, &mut self.random);
                self.variable_selector.select_variable(&mut context)
            };
            let Some(variable) = selected else {
                continue;
            };

            let values = {
                let mut context =
                    SelectionContext::new(&state, self.store, &self.checker, &mut self.random);
                self.value_selector.order_values(&mut context, variable)
            };

            let mut expanded = false;
            for candidate in values {
                self.statistics.assignments_tried += 1;

                if self
                    .checker
                    .is_consistent(variable, candidate, &state)
                    .is_err()
                {
                    self.statistics.consistency_check_failures += 1;
                    continue;
                }

                let mut child = state.branch();
                child.assign(variable, candidate);

                if self
                    .propagator
                    .propagate(&mut child, &self.checker, Some(variable))
                    .is_wipeout()
                {
                    self.statistics.propagation_failures += 1;
                    continue;
                }

                frontier.push_back((child, depth + 1));
                expanded = true;
            }

            if !expanded {
                self.statistics.backtracks += 1;
            }
        }

        self.conclude()
    }

    fn record_solution(&mut self, state: SearchState) -> BranchResult {
        self.statistics.solutions_found += 1;
        let full_conflict = assigned_variables(&state, self.store);
        self.solutions.push(state.into_solution());

        if self.solutions.len() >= self.config.max_solutions {
            BranchResult::Solved
        } else {
            // Enumeration continues: report every variable as involved so that no ancestor
            // skips its remaining values.
            BranchResult::Exhausted(full_conflict)
        }
    }

    /// Books a failure with the restart strategy and reports whether it tripped the
    /// threshold.
    fn failure_noted_triggers_restart(&mut self) -> bool {
        match &mut self.restart {
            Some(strategy) => {
                strategy.notify_failure();
                strategy.should_restart()
            }
            None => false,
        }
    }

    /// Turns the accumulated solutions into the final outcome, ranking by soft-constraint
    /// penalty when several were requested.
    fn conclude(&mut self) -> SearchOutcome {
        if self.solutions.is_empty() {
            return SearchOutcome::Infeasible;
        }

        let solutions = std::mem::take(&mut self.solutions);
        if solutions.len() == 1 {
            let mut solutions = solutions;
            return SearchOutcome::Feasible(solutions.pop().expect("one solution is present"));
        }

        let evaluator = SolutionEvaluator::new(self.instance, self.store);
        let best = solutions
            .into_iter()
            .map(|solution| {
                let penalty = evaluator.penalty(&solution);
                (solution, penalty)
            })
            .min_by(|(_, left), (_, right)| left.total_cmp(right))
            .map(|(solution, _)| solution)
            .expect("at least one solution is present");
        SearchOutcome::Feasible(best)
    }
}

/// The variables assigned in `state`, in id order.
fn assigned_variables(state: &SearchState, store: &VariableStore) -> Vec<CourseHourId> {
    store
        .ids()
        .filter(|&variable| state.is_assigned(variable))
        .collect()
}

/// Adds `incoming` conflict variables to `conflicts`, dropping the branching variable itself
/// and duplicates.
fn merge_conflicts(
    conflicts: &mut Vec<CourseHourId>,
    incoming: Vec<CourseHourId>,
    branching_variable: CourseHourId,
) {
    for variable in incoming {
        if variable != branching_variable && !conflicts.contains(&variable) {
            conflicts.push(variable);
        }
    }
}

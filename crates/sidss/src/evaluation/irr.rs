use super::config::IrrSolverConfig;
use super::domain::IrrStatus;

/// Rate found by the solver together with how the iteration ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrSolution {
    /// Fractional rate, e.g. 0.1 for 10%.
    pub rate: f64,
    pub iterations: u32,
    pub status: IrrStatus,
}

/// Present value of `cash_flows` discounted at `rate`, index 0 undiscounted.
pub fn net_present_value(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, flow)| flow / growth(rate, t))
        .sum()
}

/// Newton-Raphson on NPV(rate) = 0.
///
/// Never fails. A flat derivative stops early at the current rate, an exhausted
/// iteration budget returns the last rate, and a step that would leave the finite
/// range returns the last finite rate. The status tells these apart.
pub fn solve_irr(cash_flows: &[f64], config: &IrrSolverConfig) -> IrrSolution {
    let mut rate = config.initial_rate;

    for iteration in 0..config.max_iterations {
        let mut npv = 0.0;
        let mut d_npv = 0.0;
        for (t, flow) in cash_flows.iter().enumerate() {
            npv += flow / growth(rate, t);
            d_npv -= t as f64 * flow / growth(rate, t + 1);
        }

        if d_npv.abs() < config.derivative_floor {
            return IrrSolution {
                rate,
                iterations: iteration,
                status: IrrStatus::FlatDerivative,
            };
        }

        let next = rate - npv / d_npv;
        if !next.is_finite() {
            return IrrSolution {
                rate,
                iterations: iteration,
                status: IrrStatus::Diverged,
            };
        }
        if (next - rate).abs() < config.tolerance {
            return IrrSolution {
                rate: next,
                iterations: iteration + 1,
                status: IrrStatus::Converged,
            };
        }
        rate = next;
    }

    IrrSolution {
        rate,
        iterations: config.max_iterations,
        status: IrrStatus::IterationLimit,
    }
}

fn growth(rate: f64, periods: usize) -> f64 {
    (1.0 + rate).powi(periods as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_period_root_is_found_immediately() {
        let solution = solve_irr(&[-1000.0, 1100.0], &IrrSolverConfig::default());

        assert_eq!(solution.status, IrrStatus::Converged);
        assert!((solution.rate - 0.10).abs() < 1e-4);
    }

    #[test]
    fn converges_away_from_initial_guess() {
        let solution = solve_irr(&[-1000.0, 1200.0], &IrrSolverConfig::default());

        assert_eq!(solution.status, IrrStatus::Converged);
        assert!((solution.rate - 0.20).abs() < 1e-4);
        assert!(solution.iterations <= 20);
    }

    #[test]
    fn multi_period_root_zeroes_npv() {
        let flows = [-1000.0, 300.0, 400.0, 500.0];
        let solution = solve_irr(&flows, &IrrSolverConfig::default());

        assert!(solution.status.converged());
        assert!((solution.rate - 0.088_963).abs() < 1e-4);
        assert!(net_present_value(&flows, solution.rate).abs() < 1e-3);
    }

    #[test]
    fn flat_derivative_returns_current_rate() {
        let solution = solve_irr(&[-1000.0, 0.0], &IrrSolverConfig::default());

        assert_eq!(solution.status, IrrStatus::FlatDerivative);
        assert_eq!(solution.rate, 0.10);
        assert_eq!(solution.iterations, 0);
    }

    #[test]
    fn exhausted_budget_reports_iteration_limit() {
        let config = IrrSolverConfig {
            max_iterations: 1,
            ..IrrSolverConfig::default()
        };
        let solution = solve_irr(&[-1000.0, 300.0, 400.0, 500.0], &config);

        assert_eq!(solution.status, IrrStatus::IterationLimit);
        assert_eq!(solution.iterations, 1);
        assert!(solution.rate.is_finite());
    }

    #[test]
    fn non_finite_step_keeps_last_finite_rate() {
        let solution = solve_irr(&[-1000.0, f64::INFINITY], &IrrSolverConfig::default());

        assert_eq!(solution.status, IrrStatus::Diverged);
        assert_eq!(solution.rate, 0.10);
        assert!(solution.rate.is_finite());
        assert_eq!(solution.iterations, 0);
    }

    #[test]
    fn nan_flow_diverges_at_starting_rate() {
        let config = IrrSolverConfig {
            initial_rate: 0.5,
            ..IrrSolverConfig::default()
        };
        let solution = solve_irr(&[f64::NAN, 1.0], &config);

        assert_eq!(solution.status, IrrStatus::Diverged);
        assert_eq!(solution.rate, 0.5);
        assert!(!solution.status.converged());
    }

    #[test]
    fn npv_at_zero_rate_is_plain_sum() {
        assert_eq!(net_present_value(&[-100.0, 40.0, 70.0], 0.0), 10.0);
    }
}

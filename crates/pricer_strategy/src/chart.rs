//! Text payoff diagrams.
//!
//! Renders a payoff profile as a terminal character grid: P&L on the
//! vertical axis, spot on the horizontal, the zero line drawn across so
//! profit and loss regions read at a glance.

use crate::error::StrategyError;
use crate::profile::PayoffProfile;

/// Diagram dimensions in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    /// Plot area width in columns.
    pub width: usize,
    /// Plot area height in rows.
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
        }
    }
}

/// Renders the profile's expiry P&L over `grid` as a text diagram.
///
/// # Errors
/// `StrategyError::InvalidGrid` when the grid has fewer than two points or
/// the chart dimensions are degenerate.
///
/// # Examples
/// ```
/// use pricer_strategy::chart::{render_diagram, ChartConfig};
/// use pricer_strategy::position::Position;
/// use pricer_strategy::profile::{spot_grid, PayoffProfile};
///
/// let profile = PayoffProfile::new(vec![Position::long_call(100.0, 3.5, 1.0, 100.0)]).unwrap();
/// let grid = spot_grid(80.0, 120.0, 81).unwrap();
/// let diagram = render_diagram(&profile, &grid, &ChartConfig::default()).unwrap();
/// assert!(diagram.contains('*'));
/// ```
pub fn render_diagram(
    profile: &PayoffProfile,
    grid: &[f64],
    config: &ChartConfig,
) -> Result<String, StrategyError> {
    if grid.len() < 2 {
        return Err(StrategyError::InvalidGrid {
            message: format!("need at least 2 grid points, got {}", grid.len()),
        });
    }
    if config.width < 2 || config.height < 2 {
        return Err(StrategyError::InvalidGrid {
            message: format!("chart area {}x{} too small", config.width, config.height),
        });
    }

    // Resample the grid down to one P&L value per column
    let pnls: Vec<f64> = (0..config.width)
        .map(|col| {
            let idx = col * (grid.len() - 1) / (config.width - 1);
            profile.pnl_at(grid[idx])
        })
        .collect();

    let mut lo = pnls.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut hi = pnls.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < 1e-12 {
        // Flat profile: widen the band so the curve sits mid-chart
        lo -= 1.0;
        hi += 1.0;
    }

    let rows = config.height;
    let row_of = |value: f64| -> usize {
        let t = (hi - value) / (hi - lo);
        ((t * (rows - 1) as f64).round() as usize).min(rows - 1)
    };
    let zero_row = if lo <= 0.0 && 0.0 <= hi {
        Some(row_of(0.0))
    } else {
        None
    };

    let mut out = String::new();
    out.push_str("P&L at expiry\n");

    for row in 0..rows {
        let label = hi - (hi - lo) * row as f64 / (rows - 1) as f64;
        out.push_str(&format!("{:>12.2} |", label));
        for &pnl in &pnls {
            let here = row_of(pnl) == row;
            let ch = if here {
                '*'
            } else if zero_row == Some(row) {
                '-'
            } else {
                ' '
            };
            out.push(ch);
        }
        out.push('\n');
    }

    // Spot axis
    out.push_str(&format!("{:>12} +{}\n", "", "-".repeat(config.width)));
    out.push_str(&format!(
        "{:>12}  {:<width$.2}{:>8.2}\n",
        "spot",
        grid[0],
        grid[grid.len() - 1],
        width = config.width.saturating_sub(8)
    ));

    Ok(out)
}

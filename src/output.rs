// src/output.rs
use crate::error::ForecastResult;
use crate::forecast::path::ForecastPath;
use crate::fundamentals::Fundamentals;
use std::io::Write;

pub const DATE_FORMAT: &str = "%a, %b %-d, %Y";

pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// `▲ $1.25` for gains and unchanged days, `▼ $0.40` for losses
pub fn format_change(change: f64) -> String {
    let icon = if change >= 0.0 { '▲' } else { '▼' };
    format!("{} {}", icon, format_currency(change.abs()))
}

/// Write the day-by-day forecast table. `bands`, when given, must hold one
/// (lower, upper) pair per step and adds a range column.
pub fn render_forecast_table<W: Write>(
    w: &mut W,
    path: &ForecastPath,
    bands: Option<&[(f64, f64)]>,
) -> ForecastResult<()> {
    writeln!(w, "{}-Day Simulation for {}", path.len(), path.label)?;
    writeln!(w, "Starting Price: {}", format_currency(path.initial_price))?;
    writeln!(
        w,
        "Prices are simulated using Geometric Brownian Motion with specified parameters."
    )?;
    writeln!(w)?;

    match bands {
        Some(_) => writeln!(
            w,
            "{:>4}  {:<18} {:>14} {:>14}  {:>23}",
            "Day", "Trading Date", "Price", "Daily Change", "Model Range"
        )?,
        None => writeln!(
            w,
            "{:>4}  {:<18} {:>14} {:>14}",
            "Day", "Trading Date", "Price", "Daily Change"
        )?,
    }

    let changes = path.daily_changes();
    for (i, (step, change)) in path.steps.iter().zip(changes).enumerate() {
        let date = step.date.format(DATE_FORMAT).to_string();
        let price = format_currency(step.price);
        let change = format_change(change);
        match bands.and_then(|b| b.get(i)) {
            Some((lo, hi)) => writeln!(
                w,
                "{:>4}  {:<18} {:>14} {:>14}  {:>23}",
                i + 1,
                date,
                price,
                change,
                format!("{} - {}", format_currency(*lo), format_currency(*hi))
            )?,
            None => writeln!(w, "{:>4}  {:<18} {:>14} {:>14}", i + 1, date, price, change)?,
        }
    }

    Ok(())
}

pub fn render_fundamentals<W: Write>(w: &mut W, data: &Fundamentals) -> ForecastResult<()> {
    writeln!(w, "Key Fundamental Data")?;
    for (key, value) in data.rows() {
        writeln!(w, "  {:<16} {:>32}", key, value)?;
    }
    writeln!(w, "  * Data is simulated/mocked for this demonstration.")?;
    Ok(())
}

pub fn render_json<W: Write>(w: &mut W, path: &ForecastPath) -> ForecastResult<()> {
    serde_json::to_writer_pretty(&mut *w, path)?;
    writeln!(w)?;
    Ok(())
}

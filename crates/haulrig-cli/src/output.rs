//! Output formatting module

use haulrig_app::app::{BuildTotals, MatchReport, RigPairing, TruckProfile, ValidationReport};
use haulrig_domain::model::Severity;
use haulrig_types::{OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}~", cut)
    }
}

pub fn print_match_report(output_format: OutputFormat, report: &MatchReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    let load = &report.load;
    println!("\nMatch Result");
    println!("============");
    println!("Load:            {} ({})", load.id, load.category);
    println!("Weight:          {:.1} t", load.weight);
    println!(
        "Dimensions:      {:.2} x {:.2} x {:.2} m",
        load.dims.length, load.dims.width, load.dims.height
    );
    if let Some(truck) = &report.truck {
        println!("Truck:           {}", truck.display_name());
    }
    println!(
        "Candidates:      {} evaluated, {} can carry",
        report.evaluated,
        report.carriable_count()
    );

    if report.matches.is_empty() {
        println!("\nNo matching trailers.");
        return Ok(());
    }

    let with_rig = report.truck.is_some();
    println!();
    print!(
        "{:>3}  {:<28} {:>6} {:>5} {:>6} {:>7} {:<5} {:<6} {:<5} {:<5}",
        "#", "Trailer", "Score", "Axles", "Deck", "Max ax", "Carry", "Height", "Len", "Width"
    );
    if with_rig {
        print!(" {:>7}", "Offset");
    }
    println!();

    for entry in &report.matches {
        let m = &entry.smart_match;
        let max_axle = m
            .max_axle_load()
            .map(|l| format!("{:.2}", l))
            .unwrap_or_else(|| "-".to_string());
        print!(
            "{:>3}  {:<28} {:>5}% {:>5} {:>6.2} {:>7} {:<5} {:<6} {:<5} {:<5}",
            entry.rank,
            truncate(&m.candidate.display_name(), 28),
            entry.score,
            m.total_axles,
            m.deck_height,
            max_axle,
            yes_no(m.can_carry),
            if m.height_violation { "OVER" } else { "ok" },
            if m.length_violation { "SHORT" } else { "ok" },
            if m.width_violation { "NARROW" } else { "ok" },
        );
        if with_rig {
            match &entry.rig {
                Some(rig) => print!(" {:>7.2}", rig.trailer_offset_m),
                None => print!(" {:>7}", "-"),
            }
        }
        println!();
    }

    Ok(())
}

pub fn print_validation_reports(
    output_format: OutputFormat,
    reports: &[ValidationReport],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(reports);
    }

    println!("\nValidation Result");
    println!("=================");

    for report in reports {
        let status = if report.blocks_save() {
            "BLOCKED"
        } else if report.is_clean() {
            "OK"
        } else {
            "WARN"
        };
        println!("\n[{}] {} {}", status, report.kind, report.id);
        for finding in &report.findings {
            let marker = match finding.message.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            if finding.subject == report.id {
                println!("  {:<8} {}", marker, finding.message.message);
            } else {
                println!(
                    "  {:<8} {}: {}",
                    marker, finding.subject, finding.message.message
                );
            }
        }
    }

    let errors: usize = reports.iter().map(|r| r.count(Severity::Error)).sum();
    let warnings: usize = reports.iter().map(|r| r.count(Severity::Warning)).sum();
    println!(
        "\n{} entries checked: {} errors, {} warnings",
        reports.len(),
        errors,
        warnings
    );

    Ok(())
}

pub fn print_rig_pairing(
    output_format: OutputFormat,
    trailer_id: &str,
    pairing: &RigPairing,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(pairing);
    }

    println!("\nCoupling Offset");
    println!("===============");
    println!("Truck:           {}", pairing.truck_id);
    println!("Trailer:         {}", trailer_id);
    println!("Offset:          {:.2} m", pairing.trailer_offset_m);
    Ok(())
}

pub fn print_truck_profile(output_format: OutputFormat, profile: &TruckProfile) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(profile);
    }

    println!("\nTruck Profile");
    println!("=============");
    println!("Truck:           {} ({})", profile.name, profile.truck_id);
    println!("Axle config:     {}", profile.axle_config);
    println!("\n--- Axles ---");
    for (i, position) in profile.axle_positions.iter().enumerate() {
        match profile.axle_weights.get(i) {
            Some(weight) => println!("  {:>2}  {:>6.2} m  {:>6.2} t", i + 1, position, weight),
            None => println!("  {:>2}  {:>6.2} m", i + 1, position),
        }
    }
    println!("-------------");
    if let Some(mass) = profile.counterweight_t {
        println!("Counterweight:   {:.2} t", mass);
    }
    println!("CG:              {:.2} m from front", profile.center_of_gravity);
    Ok(())
}

pub fn print_build_totals(output_format: OutputFormat, totals: &BuildTotals) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(totals);
    }

    println!("\nBuild Totals");
    println!("============");
    println!("\n--- Trailers ---");
    println!("Total length:    {:.2} m", totals.trailers.total_length);
    println!("Total axles:     {}", totals.trailers.total_axles);
    println!("Total payload:   {:.1} t", totals.trailers.total_payload);

    println!("\n--- Trucks ---");
    println!("Total power:     {:.0} hp", totals.trucks.total_power_hp);
    println!("Total tare:      {:.1} t", totals.trucks.total_tare);
    println!("Max GTW:         {:.1} t", totals.trucks.max_gtw);

    println!("\n--- Loads ---");
    println!("Total weight:    {:.1} t", totals.loads.total_weight);
    println!("Average CG:      {:.2} m", totals.loads.average_cg);

    for modular in &totals.modular {
        println!("\n--- Modular: {} ---", modular.name);
        println!("Length:          {:.2} m", modular.totals.total_length);
        println!("Axles:           {}", modular.totals.total_axles);
        println!("Tare:            {:.1} t", modular.totals.total_tare);
        println!("Payload:         {:.1} t", modular.totals.total_payload);
        for (module_type, count) in &modular.totals.module_counts {
            println!("  {:<14} x{}", module_type.label(), count);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Goldhofer STZ-VP 4", 10), "Goldhofer~");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}

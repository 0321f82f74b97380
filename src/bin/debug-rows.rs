/// Diagnostic tool to verify the records → rows → rects pipeline
use rowmap::config::RunConfig;
use rowmap::input;
use rowmap::layout::{compute_rects, pack};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rowmap=debug".parse()?),
        )
        .init();

    let config = RunConfig::from_env()?;

    println!("=== DIAGNOSTIC: Records → Rows Pipeline ===");
    println!("Input: {} ({} rows)", config.input.display(), config.rows);

    // Load
    let start = std::time::Instant::now();
    let items = input::load_items(&config.input)?;
    let total_weight: f64 = items.iter().map(|i| i.weight).sum();
    println!(
        "\n[1] Loaded {} items in {:.2}ms (total weight={:.3})",
        items.len(),
        start.elapsed().as_secs_f64() * 1000.0,
        total_weight
    );

    // Pack
    let Some(map) = pack(&items, config.rows) else {
        println!("\n✗ FAILED: nothing to pack (no valid items or zero rows)");
        return Ok(());
    };
    println!(
        "\n[2] Packed into {} rows, weight_per_row={:.3}",
        map.rows.len(),
        map.weight_per_row
    );

    for (i, row) in map.rows.iter().enumerate() {
        let padding: f64 = row
            .items()
            .iter()
            .filter(|it| it.is_dummy)
            .map(|it| it.weight)
            .sum();
        println!(
            "    [{}] weight={:.3} items={} padding={:.3}",
            i,
            row.current_weight(),
            row.real_len(),
            padding
        );
        for item in row.items().iter().filter(|it| !it.is_dummy).take(10) {
            println!("        '{}' weight={:.3} value={}", item.name, item.weight, item.value);
        }
    }

    // Check invariants
    println!("\n[3] Checking for anomalies:");
    let mut anomalies = 0;
    for (i, row) in map.rows.iter().enumerate() {
        let sum: f64 = row.items().iter().map(|it| it.weight).sum();
        if (sum - row.current_weight()).abs() > 1e-9 * sum.abs().max(1.0) {
            println!("    ✗ row {} weight {} != item sum {}", i, row.current_weight(), sum);
            anomalies += 1;
        }
        if row.current_weight() != map.weight_per_row {
            println!("    ✗ row {} weight {} != target {}", i, row.current_weight(), map.weight_per_row);
            anomalies += 1;
        }
    }
    if map.rows.windows(2).any(|w| w[0].current_weight() < w[1].current_weight()) {
        println!("    ✗ rows are not in descending weight order");
        anomalies += 1;
    }
    let placed = map.real_items().count();
    if placed != items.len() {
        println!("    ✗ {} items placed, {} loaded", placed, items.len());
        anomalies += 1;
    }
    if anomalies == 0 {
        println!("    ✓ none");
    }

    // Geometry
    let rects = compute_rects(&map, config.viewport_width, config.viewport_height);
    let area: f32 = rects.iter().map(|r| r.area()).sum();
    let viewport_area = config.viewport_width * config.viewport_height;
    let padding_area: f32 = rects.iter().filter(|r| r.is_dummy).map(|r| r.area()).sum();
    println!(
        "\n[4] Geometry at {:.0}x{:.0}: {} rects",
        config.viewport_width,
        config.viewport_height,
        rects.len()
    );
    println!("    Coverage: {:.1}%", (area / viewport_area) * 100.0);
    println!("    Padding:  {:.1}%", (padding_area / viewport_area) * 100.0);

    Ok(())
}

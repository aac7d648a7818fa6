use console::Style;
use silhouette_core::batch::BatchReport;
use silhouette_core::pipeline::config::{PipelineConfig, SilhouetteLayer};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    ok: Style,
    warn: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            ok: Style::new().green(),
            warn: Style::new().dim().yellow(),
            error: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

fn print_layer(s: &Styles, name: &str, layer: &SilhouetteLayer) {
    let c = layer.color;
    println!(
        "    {:<12}{}",
        s.label.apply_to(name),
        s.value.apply_to(format!(
            "rgba({}, {}, {}, {})  offset ({}, {})",
            c.r, c.g, c.b, c.a, layer.offset.dx, layer.offset.dy
        ))
    );
}

pub fn print_pipeline_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Silhouette Pipeline"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Background"),
        s.path.apply_to(config.background.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(config.canvas_size)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Sprite box"),
        s.value.apply_to(config.sprite_size)
    );
    println!(
        "  {:<14}{} via {}",
        s.label.apply_to("Softening"),
        s.value.apply_to(config.blur_size),
        s.ok.apply_to(config.resample)
    );
    println!();

    println!("  {}", s.header.apply_to("Layers"));
    print_layer(&s, "Shadow", &config.style.shadow);
    print_layer(&s, "Outline", &config.style.outline);
    print_layer(&s, "Fill", &config.style.fill);
    println!();
}

pub fn print_batch_summary(report: &BatchReport) {
    let s = Styles::new();

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Processed"),
        s.ok.apply_to(report.processed.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Skipped"),
        s.warn.apply_to(report.skipped.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Failed"),
        s.error.apply_to(report.failed.len())
    );

    for (path, reason) in &report.failed {
        println!(
            "    {} {}",
            s.path.apply_to(path.display()),
            s.error.apply_to(reason)
        );
    }
    println!();
}

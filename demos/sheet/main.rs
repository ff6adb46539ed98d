//! Renders the cutouts of one enclosure back panel and dumps the placed
//! path segments as plain text.
//!
//! Usage:
//! ```text
//! cargo run --example sheet                      # kerf 0.2, writes sheet.txt
//! cargo run --example sheet -- 0.15 out.txt      # custom kerf and output
//! ```

use std::fmt::Write as _;

use kerfcut::cutout::{
    AirVentGridCutout, CircleCutout, FanCutout, HexBoltCutout, MountingScrewCutout,
    RoundedRectangleCutout,
};
use kerfcut::geometry::WarnLevel;
use kerfcut::math::Vector2;
use kerfcut::{CutConfig, Cutout, Direction2D, Layer, PathSegment, Render, RenderedShape};

fn main() -> kerfcut::Result<()> {
    // Default: WARN for everything, INFO for kerfcut and this demo.
    // Override with RUST_LOG (e.g. RUST_LOG=kerfcut=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sheet=info".parse().unwrap_or_default())
        .add_directive("kerfcut=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let kerf = args.next().and_then(|k| k.parse().ok()).unwrap_or(0.2);
    let output = args.next().unwrap_or_else(|| "sheet.txt".to_owned());
    let config = CutConfig::new(kerf)?;

    let placed: Vec<(Cutout, Vector2)> = vec![
        (MountingScrewCutout::along(6.5, 3.0, 20.0, Direction2D::Down)?.into(), Vector2::new(20.0, 140.0)),
        (MountingScrewCutout::along(6.5, 3.0, 20.0, Direction2D::Down)?.into(), Vector2::new(280.0, 140.0)),
        (FanCutout::new(40)?.into(), Vector2::new(60.0, 80.0)),
        (CircleCutout::new(5.0)?.into(), Vector2::new(110.0, 80.0)),
        (HexBoltCutout::new(4.0)?.into(), Vector2::new(130.0, 80.0)),
        (RoundedRectangleCutout::new(35.0, 35.0, 7.5)?.into(), Vector2::new(160.0, 60.0)),
        (
            RoundedRectangleCutout::new(40.0, 40.0, 7.5)?
                .with_layer(Layer::new("info").with_warn_level(WarnLevel::Info))
                .into(),
            Vector2::new(157.5, 57.5),
        ),
        (AirVentGridCutout::new(80.0, 40.0)?.into(), Vector2::new(210.0, 40.0)),
    ];

    let mut listing = String::new();
    for (cutout, offset) in &placed {
        let shape = cutout.render_with(&config)?.translated(offset);
        let loops = shape.closed_loops()?.len();
        let color = config.colors.color_for(shape.layer()).unwrap_or("black");
        tracing::info!(
            kind = cutout.kind(),
            segments = shape.len(),
            loops,
            color,
            "placed cutout"
        );
        write_shape(&mut listing, cutout.kind(), color, &shape)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    if kerfcut::io::update_file(&output, &listing)? {
        tracing::info!(%output, "sheet written");
    } else {
        tracing::info!(%output, "sheet unchanged");
    }
    Ok(())
}

fn write_shape(out: &mut String, kind: &str, color: &str, shape: &RenderedShape) -> std::fmt::Result {
    writeln!(out, "# {kind} layer={} color={color}", shape.layer())?;
    for seg in shape.segments() {
        match seg {
            PathSegment::Line { start, end } => {
                writeln!(out, "L {:.4} {:.4} {:.4} {:.4}", start.x, start.y, end.x, end.y)?;
            }
            PathSegment::Arc(arc) => writeln!(
                out,
                "A {:.4} {:.4} {:.4} {:.4} r={:.4} large={} ccw={}",
                arc.start().x,
                arc.start().y,
                arc.end().x,
                arc.end().y,
                arc.radius(),
                arc.large_arc(),
                arc.sweep()
            )?,
            PathSegment::Circle { center, radius } => {
                writeln!(out, "C {:.4} {:.4} r={radius:.4}", center.x, center.y)?;
            }
        }
    }
    Ok(())
}

use pigmix::{BlendMode, CompositeParams, RgbaF32, Threading};

const PAIRS: [(&str, [f32; 3], &str, [f32; 3]); 4] = [
    ("red", [1.0, 0.0, 0.0], "blue", [0.0, 0.0, 1.0]),
    ("yellow", [1.0, 1.0, 0.0], "blue", [0.0, 0.0, 1.0]),
    ("white", [1.0, 1.0, 1.0], "black", [0.0, 0.0, 0.0]),
    ("orange", [0.9, 0.35, 0.02], "teal", [0.0, 0.35, 0.4]),
];

const STEPS: usize = 5;

fn strip(mode: BlendMode, src: [f32; 3], dst: [f32; 3]) -> anyhow::Result<Vec<[f32; 3]>> {
    let mut out = Vec::with_capacity(STEPS);
    for step in 0..STEPS {
        let params = CompositeParams {
            mode,
            opacity: step as f32 / (STEPS - 1) as f32,
            threading: Threading::Serial,
            ..CompositeParams::default()
        };
        let mut px = vec![dst[0], dst[1], dst[2], 1.0];
        params.apply::<RgbaF32>(&mut px, &[src[0], src[1], src[2], 1.0], None)?;
        out.push([px[0], px[1], px[2]]);
    }
    Ok(out)
}

fn fmt_strip(strip: &[[f32; 3]]) -> String {
    strip
        .iter()
        .map(|c| format!("({:.3} {:.3} {:.3})", c[0], c[1], c[2]))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    for (src_name, src, dst_name, dst) in PAIRS {
        println!("{src_name} onto {dst_name}");
        println!("  over         {}", fmt_strip(&strip(BlendMode::Over, src, dst)?));
        println!("  spectral_mix {}", fmt_strip(&strip(BlendMode::SpectralMix, src, dst)?));
    }

    let params = CompositeParams::from_json(r#"{"mode":"multiply","opacity":2.0}"#)?;
    if let Err(err) = params.validate(4) {
        println!("rejected: {err}");
    }
    Ok(())
}

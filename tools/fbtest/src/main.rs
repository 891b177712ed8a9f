use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgGroup, Parser};
use fbtest_device::FramebufferDevice;
use fbtest_format::{palette, ScreenFormat};
use fbtest_surface::patterns::{bars, cross, dshade, BarsOptions};
use fbtest_surface::{capture, Surface};

#[derive(Parser, Debug)]
#[command(
    name = "fbtest",
    version,
    about = "Draw test patterns on a raw framebuffer display, poke single pixels and grab the contents to a PPM image.",
    group(ArgGroup::new("action").args(["solid", "grab", "bars", "cross", "dshade", "setpix"]).multiple(false))
)]
struct Args {
    /// Framebuffer device to drive
    #[arg(long = "fb", value_name = "PATH", default_value = "/dev/fb0")]
    fb: PathBuf,

    /// Fill the visible area with one color. Indexed: "#N" raw index, "gN"
    /// gray-ramp entry, "p" the pin marker, "N" color-ramp entry.
    /// True-color: a raw pixel value (decimal, 0x... or 0o...)
    #[arg(long, value_name = "SPEC")]
    solid: Option<String>,

    /// Grab the current contents to a binary PPM file ("-" for stdout)
    #[arg(long, value_name = "FILE")]
    grab: Option<PathBuf>,

    /// Draw the bars test card (the default action)
    #[arg(long)]
    bars: bool,

    /// Draw the bouncing scan-line pattern (true-color only)
    #[arg(long)]
    cross: bool,

    /// Draw the diagonal shading pattern (true-color only)
    #[arg(long)]
    dshade: bool,

    /// Set one pixel: "X,Y,SPEC" with SPEC "R,G,B" channel levels on
    /// true-color displays, or an indexed color spec as for --solid
    #[arg(long, value_name = "X,Y,SPEC")]
    setpix: Option<String>,

    /// 24-bit hex color installed as palette entry 212 on indexed displays
    #[arg(long, value_name = "RRGGBB")]
    pin: Option<String>,

    /// Crosshair half-size for --bars
    #[arg(long, value_name = "PIXELS", default_value_t = 32)]
    cross_size: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    run(args)
}

#[cfg(target_os = "linux")]
fn run(args: Args) -> anyhow::Result<()> {
    let mut device = fbtest_device::LinuxFramebuffer::open(&args.fb)
        .with_context(|| format!("bring up framebuffer {}", args.fb.display()))?;
    drive(&mut device, &args)
}

#[cfg(not(target_os = "linux"))]
fn run(_args: Args) -> anyhow::Result<()> {
    bail!("this tool drives the Linux framebuffer device and only runs on Linux")
}

/// Dispatches one command against an opened device.
fn drive(device: &mut dyn FramebufferDevice, args: &Args) -> anyhow::Result<()> {
    let format = device.format().clone();
    tracing::info!(
        "framebuffer is {}x{} at {} bpp{}, virtual {}x{}",
        format.width,
        format.height,
        format.bits_per_pixel,
        if format.indexed { " (indexed)" } else { "" },
        format.virtual_width,
        format.virtual_height,
    );

    if format.indexed {
        let pin = args
            .pin
            .as_deref()
            .map(parse_pin)
            .transpose()
            .context("parse --pin")?;
        install_palette(device, &format, pin);
    }

    let mut surface = Surface::new(device.surface_mut(), format.clone())?;

    if let Some(spec) = &args.solid {
        match parse_color_spec(spec, &format)? {
            ColorSpec::Index(index) => surface.fill_index(index)?,
            ColorSpec::Raw(value) => surface.fill_raw(value)?,
        }
    } else if let Some(target) = &args.grab {
        let data = capture::grab(&surface)?;
        if target.as_os_str() == "-" {
            capture::write_full(&mut io::stdout().lock(), &data).context("write image to stdout")?;
        } else {
            let mut file = File::create(target)
                .with_context(|| format!("create {}", target.display()))?;
            capture::write_full(&mut file, &data)
                .with_context(|| format!("write image to {}", target.display()))?;
        }
    } else if args.cross {
        cross(&mut surface)?;
    } else if args.dshade {
        dshade(&mut surface)?;
    } else if let Some(spec) = &args.setpix {
        set_pixel(&mut surface, spec, &format)?;
    } else {
        bars(
            &mut surface,
            BarsOptions {
                cross_half_size: args.cross_size,
            },
        )?;
    }

    Ok(())
}

/// Installs the three palette regions; a region the hardware refuses is
/// logged and skipped.
fn install_palette(device: &mut dyn FramebufferDevice, format: &ScreenFormat, pin: Option<u32>) {
    for region in [
        palette::color_ramp(format),
        palette::gray_ramp(format),
        palette::markers(pin),
    ] {
        if let Err(err) = device.install_palette(&region) {
            tracing::warn!("palette region at index {} not installed: {err}", region.start);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ColorSpec {
    Index(u8),
    Raw(u32),
}

fn parse_color_spec(spec: &str, format: &ScreenFormat) -> anyhow::Result<ColorSpec> {
    if format.indexed {
        parse_index_spec(spec).map(ColorSpec::Index)
    } else {
        parse_raw_value(spec).map(ColorSpec::Raw)
    }
}

/// Indexed color specs: `#N` raw palette index, `gN` gray-ramp entry,
/// `p` the pin marker, plain `N` color-ramp entry.
fn parse_index_spec(spec: &str) -> anyhow::Result<u8> {
    if let Some(rest) = spec.strip_prefix('#') {
        rest.parse::<u8>()
            .with_context(|| format!("invalid raw palette index {rest:?}"))
    } else if let Some(rest) = spec.strip_prefix('g') {
        let entry: u8 = rest
            .parse()
            .with_context(|| format!("invalid gray-ramp entry {rest:?}"))?;
        entry
            .checked_add(palette::GRAY_RAMP_START as u8)
            .ok_or_else(|| anyhow::anyhow!("gray-ramp entry {entry} out of range"))
    } else if spec == "p" {
        Ok(palette::MARKER_PIN)
    } else {
        let entry: u8 = spec
            .parse()
            .with_context(|| format!("invalid color-ramp entry {spec:?}"))?;
        entry
            .checked_add(palette::COLOR_RAMP_START as u8)
            .ok_or_else(|| anyhow::anyhow!("color-ramp entry {entry} out of range"))
    }
}

/// Raw container values in decimal, hex (`0x`) or octal (`0o`).
fn parse_raw_value(spec: &str) -> anyhow::Result<u32> {
    let (digits, radix) = if let Some(hex) = spec.strip_prefix("0x").or_else(|| spec.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(oct) = spec.strip_prefix("0o") {
        (oct, 8)
    } else {
        (spec, 10)
    };
    u32::from_str_radix(digits, radix).with_context(|| format!("invalid color value {spec:?}"))
}

/// A 24-bit RRGGBB pin color, with or without a leading `0x`.
fn parse_pin(spec: &str) -> anyhow::Result<u32> {
    let digits = spec.strip_prefix("0x").or_else(|| spec.strip_prefix("0X")).unwrap_or(spec);
    let value = u32::from_str_radix(digits, 16)
        .with_context(|| format!("invalid pin color {spec:?}"))?;
    if value > 0xFF_FFFF {
        bail!("pin color {spec:?} does not fit in 24 bits");
    }
    Ok(value)
}

/// `--setpix X,Y,SPEC`: true-color SPEC is three channel levels `R,G,B`,
/// indexed SPEC is an indexed color spec.
fn set_pixel(surface: &mut Surface<'_>, spec: &str, format: &ScreenFormat) -> anyhow::Result<()> {
    let mut parts = spec.splitn(3, ',');
    let (x, y, color) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), Some(color)) => (x, y, color),
        _ => bail!("--setpix needs X,Y,SPEC (got {spec:?})"),
    };
    let x: u32 = x.parse().with_context(|| format!("invalid x {x:?}"))?;
    let y: u32 = y.parse().with_context(|| format!("invalid y {y:?}"))?;

    if format.indexed {
        let index = parse_index_spec(color)?;
        surface.set_index(x, y, index)?;
    } else {
        let levels: Vec<&str> = color.split(',').collect();
        if levels.len() != 3 {
            bail!("true-color --setpix needs R,G,B channel levels (got {color:?})");
        }
        let channel = |s: &str| -> anyhow::Result<u8> {
            s.parse()
                .with_context(|| format!("invalid channel level {s:?}"))
        };
        let (r, g, b) = (channel(levels[0])?, channel(levels[1])?, channel(levels[2])?);
        surface.set_level(x, y, r, g, b)?;
    }
    Ok(())
}

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gpu_snapshot::logging::{init_logging, LoggingConfig};
use gpu_snapshot::native::{GPU_COMMAND_SIZE, GPU_STATE_SIZE};
use gpu_snapshot::render::DrawParams;
use gpu_snapshot::{CommandList, CommandType, GpuState};

/// Decodes native GPU state or command list dumps.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Dump file holding one native GPU state, or `--commands` native commands.
    file: PathBuf,

    /// Treat the file as this many consecutive native commands.
    #[arg(long, value_name = "N")]
    commands: Option<usize>,

    /// Log filter in `env_logger` syntax (overrides RUST_LOG).
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..Default::default()
    });

    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    log::debug!("read {} bytes from {}", bytes.len(), args.file.display());

    match args.commands {
        None => {
            if bytes.len() != GPU_STATE_SIZE {
                log::warn!(
                    "expected {GPU_STATE_SIZE} bytes for one state, file has {}",
                    bytes.len()
                );
            }
            let state =
                GpuState::from_native_bytes(&bytes).context("failed to decode GPU state")?;
            print!("{}", describe_state(&state)?);
        }
        Some(count) => {
            let list = CommandList::from_native_bytes(count, &bytes).with_context(|| {
                format!("failed to decode {count} commands ({GPU_COMMAND_SIZE} bytes each)")
            })?;

            println!("{} commands, {} draws", list.len(), list.draw_count());
            for (i, cmd) in list.iter().enumerate() {
                match cmd.command_type() {
                    CommandType::ClearRenderBuffer => println!("#{i} clear"),
                    CommandType::DrawGeometry => println!(
                        "#{i} draw geometry {} indices {:?}",
                        cmd.geometry_id(),
                        cmd.index_range()
                    ),
                }
                for line in describe_state(cmd.gpu_state())?.lines() {
                    println!("    {line}");
                }
            }
        }
    }

    Ok(())
}

fn describe_state(state: &GpuState) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let params = DrawParams::from_state(state);
    let shader = state.shader().map_or_else(|| "unknown".to_string(), |s| format!("{s:?}"));

    writeln!(out, "viewport      {}x{}", state.viewport_width(), state.viewport_height())?;
    writeln!(out, "transform     {:?}", state.transform().to_cols_array())?;
    writeln!(out, "shader        {} ({shader})", state.shader_type())?;
    writeln!(
        out,
        "flags         texturing={} blend={} scissor={}",
        state.enable_texturing(),
        state.enable_blend(),
        state.enable_scissor()
    )?;
    writeln!(out, "render buffer {:?}", state.render_buffer())?;
    writeln!(out, "textures      {:?}", state.bound_textures().collect::<Vec<_>>())?;
    writeln!(out, "scalars       {:?}", state.uniform_scalar())?;
    writeln!(out, "clips         {} active", state.active_clips().len())?;
    match params.scissor {
        Some((x, y, w, h)) => writeln!(out, "scissor       x={x} y={y} w={w} h={h}")?,
        None => writeln!(out, "scissor       empty (draw skipped)")?,
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpu_snapshot::GpuStateDesc;
    use gpu_snapshot::coords::IntRect;

    #[test]
    fn describes_bound_state() {
        let state = GpuState::new(GpuStateDesc {
            viewport_width: 320,
            viewport_height: 240,
            render_buffer_id: 4,
            texture_ids: [0, 6, 0],
            enable_scissor: true,
            scissor_rect: IntRect::new(0, 0, 10, 10),
            ..Default::default()
        });
        let text = describe_state(&state).unwrap();

        assert!(text.contains("viewport      320x240"));
        assert!(text.contains("shader        0 (Fill)"));
        assert!(text.contains("render buffer Some(4)"));
        assert!(text.contains("textures      [(2, 6)]"));
        assert!(text.contains("scissor       x=0 y=0 w=10 h=10"));
    }

    #[test]
    fn args_parse_command_mode() {
        let args = Args::try_parse_from(["inspect", "dump.bin", "--commands", "3"]).unwrap();
        assert_eq!(args.commands, Some(3));
        assert_eq!(args.file, PathBuf::from("dump.bin"));
    }
}

use anyhow::Result;

use gausslog::extract::geometry;

use crate::cli::{FramePick, GeomArgs};
use crate::display::{Context, print_note};

pub fn run(args: GeomArgs, ctx: Context) -> Result<()> {
    let doc = super::load_document(&args.io)?;

    let text = match args.frame {
        FramePick::First => format!("{}\n", geometry::first_frame(&doc)?.to_block_text()),
        FramePick::Last => format!("{}\n", geometry::last_frame(&doc)?.to_block_text()),
        FramePick::All => {
            let frames = geometry::standard_orientations(&doc)?;
            if ctx.interactive {
                print_note(&format!("{} geometry frame(s)", frames.len()));
            }
            if frames.is_empty() {
                String::new()
            } else {
                let blocks: Vec<String> =
                    frames.iter().map(|frame| frame.to_block_text()).collect();
                format!("{}\n", blocks.join("\n\n"))
            }
        }
    };

    super::write_result(&args.io, &text)
}

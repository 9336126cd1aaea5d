//! Built-in scene rolled when no scene file is given.

use anyhow::Result;

use credits_roll::core::{CellStyle, Layer, Scene};
use credits_roll::term::parse_art;
use credits_roll::types::Rgb;

pub const TEXT: &str = "CREDITS ROLL
_                                        _

_Directed by_\\The Frame Loop

_Layout_\\Three spaces from center







_Underlines_\\Emphasis markers

_Pacing_\\Forty frames a second


Every line enters at the bottom
and leaves at the top, never to return

Columns split at the first marker
Blank lines keep the rhythm

_                                        _

Press q to leave early";

const PAC: &str = r"  .--.
 / _.-'
 \  '-.
  '--'";

const PORTRAIT: &str = r"+-----------+
|           |
|   o   o   |
|     ^     |
|   \___/   |
|           |
+-----------+";

/// Top of the pac art at offset zero: inside the run of blank lines.
const PAC_BASE: i32 = 640;
/// The portrait follows the last line, then holds at the center.
const PORTRAIT_BASE: i32 = 1060;

pub fn scene() -> Result<Scene> {
    let color = Rgb::new(160, 160, 160);
    let pac = parse_art(PAC, CellStyle::fg(Rgb::new(255, 220, 0)).with_bold());
    let portrait = parse_art(PORTRAIT, CellStyle::fg(color));

    let scene = Scene::new(TEXT, color)
        .with_layer(Layer::scrolling(pac, PAC_BASE))?
        .with_layer(Layer::floored(portrait, PORTRAIT_BASE))?;
    Ok(scene)
}

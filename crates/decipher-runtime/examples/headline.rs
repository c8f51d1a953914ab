//! Headless scramble-reveal demo: prints one line per animation frame.
//!
//! Run with: cargo run -p decipher-runtime --example headline

use std::time::Duration;

use decipher_core::geometry::Rect;
use decipher_render::{Buffer, PackedRgba, Style};
use decipher_runtime::{FixedFrames, FrameSource, RevealSession};
use decipher_widgets::{Label, ScrambleReveal, StatefulWidget, Widget};

fn main() {
    let text = "THE MAGIC WORDS ARE SQUEAMISH OSSIFRAGE";
    let step = Duration::from_millis(40);

    let mut banner = Buffer::new(16, 1);
    Label::new("deciphering...")
        .style(Style::new().dim())
        .render(Rect::from_size(16, 1), &mut banner);
    println!("{}", banner.row_text(0));

    let mut session = RevealSession::new(text)
        .reveal_delay(step)
        .flip_delay(step);
    let widget = ScrambleReveal::new()
        .revealed_style(Style::new().fg(PackedRgba::rgb(120, 220, 160)).bold())
        .scrambled_style(Style::new().dim());

    let area = Rect::from_size(text.chars().count() as u16, 1);
    let viewport = Rect::from_size(80, 24);
    let mut frames = FixedFrames::new(step);

    while session.wants_frame() {
        let Some(dt) = frames.next_frame() else {
            break;
        };
        session.frame(dt, area, viewport);

        let mut buf = Buffer::new(area.width, 1);
        widget.render(area, &mut buf, session.run_mut());
        println!("{}", buf.row_text(0));

        std::thread::sleep(step);
    }
}

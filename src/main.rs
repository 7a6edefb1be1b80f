use ball_chaser_rs::logger;
use ball_chaser_rs::visual_servo::{BallChaser, Frame, QueuedFrameSource, Rgb, ServoConfig};

use tracing::info;

const ROWS: usize = 48;
const PIXELS_PER_ROW: usize = 64;

/// Frame with a filled square of `color` whose top-left corner is at (`top`, `left`).
fn frame_with_ball(top: usize, left: usize, size: usize, color: Rgb) -> Frame {
    let mut frame = Frame::blank(ROWS, PIXELS_PER_ROW * Frame::BYTES_PER_PIXEL);
    for row in top..(top + size).min(ROWS) {
        for column in left..(left + size).min(PIXELS_PER_ROW) {
            frame.set_pixel(row, column, color);
        }
    }
    frame
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting ball_chaser...");

    let config = ServoConfig::builder()
        .target_color(Rgb::WHITE)
        .forward_speed(0.5)
        .turn_rate(1.0)
        .build();
    info!("Target color: {:?}", config.target_color);
    info!(
        "Forward speed: {}, turn rate: {}",
        config.forward_speed, config.turn_rate
    );

    let color = config.target_color;
    let mut chaser = BallChaser::new(config);

    // Ball drifts from the left edge across to the right, then leaves the view.
    let mut feed: QueuedFrameSource = [2, 18, 30, 50]
        .into_iter()
        .map(|left| frame_with_ball(10, left, 8, color))
        .chain(std::iter::once(Frame::blank(ROWS, PIXELS_PER_ROW * 3)))
        .collect();

    let summary = chaser.run(&mut feed);
    info!("Run summary: {:?}", summary);

    if summary.malformed > 0 || summary.dispatch_failures > 0 {
        anyhow::bail!(
            "{} malformed frames, {} failed dispatches",
            summary.malformed,
            summary.dispatch_failures
        );
    }

    Ok(())
}

use std::{process::ExitCode, time::Instant};

use clap::Parser;
use log::{error, info};
use sdl2::keyboard::Keycode;

use empty_window::{
    gl_wrappers::gl_upd_viewport,
    logging::{init_logging, LoggingConfig},
    time::{soft_cap_sleep, FrameClock, FrameStats},
    window::{enable_debug_output, init_sdl, resizes_framebuffer},
    Config, Renderer, Result,
};

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(LoggingConfig {
        env_filter: config.log.clone(),
    });

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let handles = init_sdl(config)?;
    let mut event_pump = handles.sdl.event_pump()?;

    if config.gl_debug {
        enable_debug_output();
    }
    let (width, height) = handles.window.drawable_size();
    gl_upd_viewport(width, height)?;

    let vertices = config.scene.vertices();
    let mut renderer = Renderer::new(&handles.gl_ctx, vertices)?;
    info!(
        "drawing {} ({} vertices), animation {}",
        config.scene,
        renderer.vertex_count(),
        if config.animate { "on" } else { "off" }
    );

    let budget = config.frame_budget();
    let mut clock = FrameClock::new();
    let mut stats = FrameStats::new(config.fps_cap as usize);

    'going: loop {
        let instant_loop_start = Instant::now();
        for event in event_pump.poll_iter() {
            use sdl2::event::Event as Ev;
            match event {
                Ev::Quit { .. }
                | Ev::KeyDown {
                    keycode: Some(Keycode::ESCAPE),
                    ..
                } => {
                    break 'going;
                }
                Ev::Window {
                    window_id,
                    win_event,
                    ..
                } if window_id == handles.main_id && resizes_framebuffer(&win_event) => {
                    let (width, height) = handles.window.drawable_size();
                    gl_upd_viewport(width, height)?;
                }
                _ => {}
            }
        }

        let time = config.animate.then(|| clock.elapsed_secs());

        renderer.clear();
        renderer.draw(time);
        handles.window.gl_swap_window();

        soft_cap_sleep(budget, instant_loop_start);

        let frame = clock.tick();
        stats.push(frame.dt);
        if let Some(report) = stats.report(Instant::now()) {
            info!(
                "frametime: {:0.2}ms, FPS: {:0.1}, frames counted: {:05}",
                report.avg_frametime * 1000.,
                report.fps,
                report.frames
            );
        }
    }

    info!("exiting after {} frames", clock.frame_index());
    Ok(())
}

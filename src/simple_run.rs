use std::time::{Duration, Instant};

use sdl2::{
    event::Event,
    keyboard::Keycode,
    pixels::PixelFormatEnum,
    render::{Canvas, Texture},
    video::Window,
    EventPump,
};

use crate::{ClockConfig, ClockRenderer, Display, Lcd, Rgb565};

const LCD_NAME: &str = "Virtual LCD";
// 等待期间处理窗口事件的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub fn run(config: ClockConfig) -> Result<(), String> {
    env_logger::init();
    let sdl_ctx = sdl2::init()?;
    let video_sys = sdl_ctx.video()?;

    // open a window
    let scale = config.scale.max(1);
    let win = video_sys
        .window(LCD_NAME, Lcd::WIDTH as u32 * scale, Lcd::HEIGHT as u32 * scale)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = win.into_canvas().build().map_err(|e| e.to_string())?;
    let event_pump = sdl_ctx.event_pump()?;
    canvas.set_scale(scale as f32, scale as f32)?;

    let creator = canvas.texture_creator();
    let texture = creator
        .create_texture_target(PixelFormatEnum::RGB24, Lcd::WIDTH as u32, Lcd::HEIGHT as u32)
        .map_err(|e| e.to_string())?;

    let mut display = SdlLcd {
        lcd: Lcd::new(),
        canvas,
        texture,
        event_pump,
        rgb24: vec![0; Lcd::WIDTH * Lcd::HEIGHT * 3],
        frame_cnt: 0,
        base_instant: Instant::now(),
        base_frame: 0,
    };

    let mut renderer = ClockRenderer::new(config);
    renderer.run(&mut display, |_| false)?;
    Ok(())
}

/// 把 Lcd 缓冲区显示在 SDL 窗口中
struct SdlLcd<'a> {
    lcd: Lcd,
    canvas: Canvas<Window>,
    texture: Texture<'a>,
    event_pump: EventPump,
    rgb24: Vec<u8>,
    // 用于帧率控制的时刻与帧数
    frame_cnt: u64,
    base_instant: Instant,
    base_frame: u64,
}

impl SdlLcd<'_> {
    fn handle_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } = event {
                log::info!("window closed after {} frames", self.frame_cnt);
                std::process::exit(0);
            }
        }
    }

    /// 等到本帧结束的时刻, 落后超过半帧时重新计时
    fn wait(&mut self, wait_ms: u32) {
        let frame_time = Duration::from_millis(wait_ms as u64);
        let frames_from_base = (self.frame_cnt + 1 - self.base_frame) as u32;
        let deadline = self.base_instant + frame_time * frames_from_base;
        loop {
            self.handle_events();
            let now = Instant::now();
            if now >= deadline {
                if now - deadline > frame_time / 2 {
                    log::debug!("frame {} is late, reset frame pacing", self.frame_cnt);
                    self.base_frame = self.frame_cnt + 1;
                    self.base_instant = now;
                }
                break;
            }
            std::thread::sleep((deadline - now).min(POLL_INTERVAL));
        }
    }
}

impl Display for SdlLcd<'_> {
    fn clear(&mut self) {
        self.lcd.clear();
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        self.lcd.put_pixel(x, y, color);
    }

    fn present(&mut self, wait_ms: u32) {
        self.lcd.write_rgb24(&mut self.rgb24);
        if let Err(e) = self.texture.update(None, &self.rgb24, Lcd::WIDTH * 3) {
            log::error!("Failed to update LCD texture: {}", e);
        }
        if let Err(e) = self.canvas.copy(&self.texture, None, None) {
            log::error!("Failed to copy LCD texture: {}", e);
        }
        self.canvas.present();

        self.wait(wait_ms);
        self.frame_cnt += 1;
    }
}

//! 卡片导出管线
//!
//! 把当前卡面按 3 倍显示密度绘制成 PNG 并写入下载目录。
//! 绘制用 tiny-skia（渐变、圆角、合成），文字用 ab_glyph 轮廓
//! 逐像素填充；党徽与芯片图为远程资源，拉取失败时退化为
//! 本地绘制的占位图形，不会让导出失败。

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use tiny_skia::{
    Color, FillRule, GradientStop, IntSize, LinearGradient, Paint, Path, PathBuilder, Pixmap,
    PixmapPaint, Point, SpreadMode, Stroke, Transform,
};

use crate::models::{ApplicationForm, CARD_BRAND, CARD_EXPIRY, CardFace, CardTheme, Photo};

/// 导出像素密度（显示分辨率的倍数）
pub const EXPORT_SCALE: u32 = 3;

/// 卡面基准尺寸（约 1.58:1）
pub const CARD_WIDTH: u32 = 380;
pub const CARD_HEIGHT: u32 = 240;

/// 远程素材
pub const LOGO_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/31/BNP_logo.png/960px-BNP_logo.png";
pub const CHIP_URL: &str = "https://static.vecteezy.com/system/resources/thumbnails/009/400/645/small/sim-card-clipart-design-illustration-free-png.png";

/// 导出错误
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no usable TTF font found for card text")]
    FontUnavailable,

    #[error("failed to allocate card pixmap")]
    PixmapCreation,

    #[error("card geometry path could not be built")]
    Geometry,

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// 导出当前表单对应的卡片
///
/// 产出文件名为 `bnp-card-<手机号|"user">.png`。任何一步失败都
/// 不会留下残缺文件。
pub fn export_card(form: &ApplicationForm) -> Result<PathBuf, ExportError> {
    let face = CardFace::project(form);
    let font = load_font()?;
    let artwork = fetch_artwork();

    let pixmap = draw_card(&face, &font, &artwork)?;
    let png = pixmap
        .encode_png()
        .map_err(|e| ExportError::Encode(e.to_string()))?;

    let path = output_dir()?.join(export_file_name(&form.mobile));
    fs::write(&path, png)?;
    Ok(path)
}

/// 产出文件名（手机号为空时固定用 "user"）
pub fn export_file_name(mobile: &str) -> String {
    let tag = if mobile.is_empty() { "user" } else { mobile };
    format!("bnp-card-{tag}.png")
}

/// 下载目录，取不到时退回当前目录
fn output_dir() -> io::Result<PathBuf> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    std::env::current_dir()
}

// ============ 字体 ============

const FONT_CANDIDATES: [&str; 4] = [
    "NotoSansBengali-Regular.ttf",
    "NotoSansBengaliUI-Regular.ttf",
    "NotoSans-Regular.ttf",
    "DejaVuSans.ttf",
];

const FONT_DIRS: [&str; 5] = [
    "/usr/share/fonts/truetype/noto",
    "/usr/share/fonts/noto",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
];

/// 在常见字体目录中找一个可用的 TTF（优先孟加拉文字形的 Noto）
fn load_font() -> Result<FontVec, ExportError> {
    let mut search: Vec<PathBuf> = Vec::new();
    if let Some(user_fonts) = dirs::font_dir() {
        search.push(user_fonts);
    }
    search.extend(FONT_DIRS.iter().map(PathBuf::from));

    for dir in &search {
        for name in FONT_CANDIDATES {
            let path = dir.join(name);
            let Ok(bytes) = fs::read(&path) else {
                continue;
            };
            match FontVec::try_from_vec(bytes) {
                Ok(font) => return Ok(font),
                Err(err) => log::warn!("invalid font {}: {err}", path.display()),
            }
        }
    }
    Err(ExportError::FontUnavailable)
}

// ============ 远程素材 ============

struct Artwork {
    logo: Option<Pixmap>,
    chip: Option<Pixmap>,
}

fn fetch_artwork() -> Artwork {
    Artwork {
        logo: fetch_image(LOGO_URL),
        chip: fetch_image(CHIP_URL),
    }
}

/// 拉取并解码一张远程图；失败只降级，不报错
fn fetch_image(url: &str) -> Option<Pixmap> {
    match try_fetch_image(url) {
        Ok(pixmap) => Some(pixmap),
        Err(err) => {
            log::warn!("artwork fetch failed ({url}): {err}");
            None
        }
    }
}

fn try_fetch_image(url: &str) -> Result<Pixmap, Box<dyn std::error::Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(4))
        .build()?;
    let bytes = client.get(url).send()?.error_for_status()?.bytes()?;
    let decoded = image::load_from_memory(&bytes)?.to_rgba8();
    rgba_to_pixmap(decoded.width(), decoded.height(), decoded.as_raw())
        .ok_or_else(|| "pixmap allocation failed".into())
}

/// 直通 RGBA → 预乘 Pixmap
fn rgba_to_pixmap(width: u32, height: u32, rgba: &[u8]) -> Option<Pixmap> {
    let size = IntSize::from_wh(width, height)?;
    let mut data = rgba.to_vec();
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u16;
        px[0] = ((px[0] as u16 * a) / 255) as u8;
        px[1] = ((px[1] as u16 * a) / 255) as u8;
        px[2] = ((px[2] as u16 * a) / 255) as u8;
    }
    Pixmap::from_vec(data, size)
}

// ============ 卡面绘制 ============

/// 空白卡底：3 倍密度的圆角渐变卡片，圆角外保持透明
fn new_card_pixmap(theme: CardTheme) -> Result<Pixmap, ExportError> {
    let s = EXPORT_SCALE as f32;
    let w = (CARD_WIDTH * EXPORT_SCALE) as f32;
    let h = (CARD_HEIGHT * EXPORT_SCALE) as f32;

    let mut pixmap =
        Pixmap::new(CARD_WIDTH * EXPORT_SCALE, CARD_HEIGHT * EXPORT_SCALE)
            .ok_or(ExportError::PixmapCreation)?;

    let card = rounded_rect(0.0, 0.0, w, h, 16.0 * s).ok_or(ExportError::Geometry)?;

    // 三段对角渐变底
    let [c0, c1, c2] = theme.stops;
    let gradient = LinearGradient::new(
        Point::from_xy(0.0, 0.0),
        Point::from_xy(w, h),
        vec![
            GradientStop::new(0.0, rgb(c0)),
            GradientStop::new(0.5, rgb(c1)),
            GradientStop::new(1.0, rgb(c2)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    )
    .ok_or(ExportError::Geometry)?;
    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.shader = gradient;
    pixmap.fill_path(&card, &paint, FillRule::Winding, Transform::identity(), None);

    // 顶部光泽
    let gloss = LinearGradient::new(
        Point::from_xy(0.0, 0.0),
        Point::from_xy(0.0, h * 0.45),
        vec![
            GradientStop::new(0.0, Color::from_rgba8(255, 255, 255, 34)),
            GradientStop::new(1.0, Color::from_rgba8(255, 255, 255, 0)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    )
    .ok_or(ExportError::Geometry)?;
    let mut gloss_paint = Paint::default();
    gloss_paint.anti_alias = true;
    gloss_paint.shader = gloss;
    pixmap.fill_path(
        &card,
        &gloss_paint,
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    Ok(pixmap)
}

/// 把卡面画进一张 3 倍密度的 Pixmap
fn draw_card(face: &CardFace, font: &FontVec, artwork: &Artwork) -> Result<Pixmap, ExportError> {
    let s = EXPORT_SCALE as f32;
    let w = (CARD_WIDTH * EXPORT_SCALE) as f32;

    let mut pixmap = new_card_pixmap(face.theme)?;

    let pad = 20.0 * s;

    // 左上：党徽 + 品牌名
    draw_logo(&mut pixmap, artwork.logo.as_ref(), pad, pad, 32.0 * s)?;
    draw_text(
        &mut pixmap,
        font,
        13.0 * s,
        pad + 40.0 * s,
        pad + 22.0 * s,
        (255, 255, 255),
        1.5 * s,
        CARD_BRAND,
    );

    // 右上：类别标签小牌
    let label_px = 10.0 * s;
    let label_w = text_width(font, label_px, 0.0, face.label);
    let lx = w - pad - label_w;
    draw_text(
        &mut pixmap,
        font,
        label_px,
        lx,
        pad + 13.0 * s,
        (255, 255, 255),
        0.0,
        face.label,
    );
    if let Some(pill) = rounded_rect(
        lx - 6.0 * s,
        pad,
        label_w + 12.0 * s,
        18.0 * s,
        4.0 * s,
    ) {
        stroke_path(&mut pixmap, &pill, (255, 255, 255, 70), s);
    }

    // 芯片
    draw_chip(
        &mut pixmap,
        artwork.chip.as_ref(),
        pad + 6.0 * s,
        86.0 * s,
        40.0 * s,
        30.0 * s,
    )?;

    // 照片框
    draw_photo_box(
        &mut pixmap,
        font,
        face.photo,
        w - pad - 68.0 * s,
        70.0 * s,
        62.0 * s,
        80.0 * s,
        s,
    )?;

    // 卡号（先画一层暗影再画白字）
    let number_px = 21.0 * s;
    draw_text(
        &mut pixmap,
        font,
        number_px,
        pad + 1.2 * s,
        173.2 * s,
        (0, 0, 0),
        2.0 * s,
        &face.number,
    );
    draw_text(
        &mut pixmap,
        font,
        number_px,
        pad,
        172.0 * s,
        (255, 255, 255),
        2.0 * s,
        &face.number,
    );

    // 有效期
    draw_text(
        &mut pixmap,
        font,
        7.0 * s,
        pad,
        193.0 * s,
        (230, 230, 230),
        0.0,
        "মেয়াদ শেষ",
    );
    draw_text(
        &mut pixmap,
        font,
        11.0 * s,
        pad + 42.0 * s,
        195.0 * s,
        (255, 255, 255),
        1.0 * s,
        CARD_EXPIRY,
    );

    // 持卡人姓名
    draw_text(
        &mut pixmap,
        font,
        14.0 * s,
        pad,
        220.0 * s,
        (255, 255, 255),
        1.0 * s,
        face.holder,
    );

    // 右下：BNP PAY 白牌
    draw_pay_plate(&mut pixmap, font, w - pad, 196.0 * s, s)?;

    Ok(pixmap)
}

/// 党徽：白底圆 + 远程图（缺图时画绿色环占位）
fn draw_logo(
    pixmap: &mut Pixmap,
    logo: Option<&Pixmap>,
    x: f32,
    y: f32,
    size: f32,
) -> Result<(), ExportError> {
    let mut pb = PathBuilder::new();
    pb.push_circle(x + size / 2.0, y + size / 2.0, size / 2.0);
    let circle = pb.finish().ok_or(ExportError::Geometry)?;
    fill_path(pixmap, &circle, (255, 255, 255, 235));

    match logo {
        Some(art) => {
            let inset = size * 0.12;
            blit_scaled(pixmap, art, x + inset, y + inset, size - inset * 2.0);
        }
        None => {
            let mut pb = PathBuilder::new();
            pb.push_circle(x + size / 2.0, y + size / 2.0, size * 0.32);
            if let Some(inner) = pb.finish() {
                stroke_path(pixmap, &inner, (0, 106, 78, 255), size * 0.1);
            }
        }
    }
    Ok(())
}

/// 芯片：远程图，缺图时画金色圆角块加触点线
fn draw_chip(
    pixmap: &mut Pixmap,
    chip: Option<&Pixmap>,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
) -> Result<(), ExportError> {
    if let Some(art) = chip {
        blit_scaled(pixmap, art, x, y, w);
        return Ok(());
    }

    let body = rounded_rect(x, y, w, h, h * 0.2).ok_or(ExportError::Geometry)?;
    fill_path(pixmap, &body, (212, 175, 55, 255));

    let mut pb = PathBuilder::new();
    pb.move_to(x, y + h / 2.0);
    pb.line_to(x + w, y + h / 2.0);
    pb.move_to(x + w / 3.0, y);
    pb.line_to(x + w / 3.0, y + h);
    pb.move_to(x + w * 2.0 / 3.0, y);
    pb.line_to(x + w * 2.0 / 3.0, y + h);
    let contacts = pb.finish().ok_or(ExportError::Geometry)?;
    stroke_path(pixmap, &contacts, (140, 110, 30, 255), h * 0.06);
    Ok(())
}

/// 照片框：有照片就等比拉伸填充，否则半透明占位框 + 文字
#[allow(clippy::too_many_arguments)]
fn draw_photo_box(
    pixmap: &mut Pixmap,
    font: &FontVec,
    photo: Option<&Photo>,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    s: f32,
) -> Result<(), ExportError> {
    let frame = rounded_rect(x, y, w, h, 8.0 * s).ok_or(ExportError::Geometry)?;
    fill_path(pixmap, &frame, (255, 255, 255, 40));

    match photo {
        Some(photo) => {
            if let Some(buf) =
                image::RgbaImage::from_raw(photo.width, photo.height, photo.rgba.clone())
            {
                let scaled = image::imageops::resize(
                    &buf,
                    w as u32,
                    h as u32,
                    image::imageops::FilterType::Triangle,
                );
                if let Some(pm) = rgba_to_pixmap(scaled.width(), scaled.height(), scaled.as_raw())
                {
                    pixmap.draw_pixmap(
                        x as i32,
                        y as i32,
                        pm.as_ref(),
                        &PixmapPaint::default(),
                        Transform::identity(),
                        None,
                    );
                }
            }
        }
        None => {
            let caption = "ছবি";
            let caption_px = 10.0 * s;
            let cw = text_width(font, caption_px, 0.0, caption);
            draw_text(
                pixmap,
                font,
                caption_px,
                x + (w - cw) / 2.0,
                y + h / 2.0 + 4.0 * s,
                (255, 255, 255),
                0.0,
                caption,
            );
        }
    }

    stroke_path(pixmap, &frame, (255, 255, 255, 90), s);
    Ok(())
}

/// 右下角的 "BNP PAY" 白牌（anchor 为右边缘）
fn draw_pay_plate(
    pixmap: &mut Pixmap,
    font: &FontVec,
    right: f32,
    y: f32,
    s: f32,
) -> Result<(), ExportError> {
    let bnp_px = 16.0 * s;
    let pay_px = 8.0 * s;
    let bnp_w = text_width(font, bnp_px, 0.0, "BNP");
    let pay_w = text_width(font, pay_px, 0.0, "PAY");
    let plate_w = bnp_w + pay_w + 18.0 * s;
    let plate_h = 22.0 * s;
    let x = right - plate_w;

    let plate = rounded_rect(x, y, plate_w, plate_h, 4.0 * s).ok_or(ExportError::Geometry)?;
    fill_path(pixmap, &plate, (255, 255, 255, 232));

    draw_text(
        pixmap,
        font,
        bnp_px,
        x + 6.0 * s,
        y + 16.0 * s,
        (0, 106, 78),
        0.0,
        "BNP",
    );
    draw_text(
        pixmap,
        font,
        pay_px,
        x + 10.0 * s + bnp_w,
        y + 10.0 * s,
        (218, 41, 28),
        0.0,
        "PAY",
    );
    Ok(())
}

// ============ 绘制基元 ============

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgba8(r, g, b, 255)
}

fn fill_path(pixmap: &mut Pixmap, path: &Path, (r, g, b, a): (u8, u8, u8, u8)) {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.set_color(Color::from_rgba8(r, g, b, a));
    pixmap.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
}

fn stroke_path(pixmap: &mut Pixmap, path: &Path, (r, g, b, a): (u8, u8, u8, u8), width: f32) {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    paint.set_color(Color::from_rgba8(r, g, b, a));
    let stroke = Stroke {
        width,
        ..Stroke::default()
    };
    pixmap.stroke_path(path, &paint, &stroke, Transform::identity(), None);
}

/// 圆角矩形路径
fn rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}

/// 把素材图等比缩放到目标宽度后贴上去
fn blit_scaled(pixmap: &mut Pixmap, art: &Pixmap, x: f32, y: f32, target_w: f32) {
    let scale = target_w / art.width() as f32;
    let transform = Transform::from_scale(scale, scale).post_translate(x, y);
    pixmap.draw_pixmap(
        0,
        0,
        art.as_ref(),
        &PixmapPaint::default(),
        transform,
        None,
    );
}

/// 文本宽度（含字距与字形之间的额外间距；末尾字形后不加间距）
fn text_width(font: &FontVec, px: f32, tracking: f32, text: &str) -> f32 {
    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);
    let mut width = 0.0;
    let mut last: Option<GlyphId> = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = last {
            width += scaled.kern(prev, id) + tracking;
        }
        width += scaled.h_advance(id);
        last = Some(id);
    }
    width
}

/// 按字形轮廓逐像素画一行文字，返回前进后的 caret 位置
///
/// ab_glyph 不做复杂文字的连字整形，孟加拉合体字会按独立
/// 字形排布，导出效果可接受。
#[allow(clippy::too_many_arguments)]
fn draw_text(
    pixmap: &mut Pixmap,
    font: &FontVec,
    px: f32,
    x: f32,
    baseline: f32,
    color: (u8, u8, u8),
    tracking: f32,
    text: &str,
) -> f32 {
    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);
    let mut caret = x;
    let mut last: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = last {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id) + tracking;
        last = Some(id);

        if let Some(outline) = font.outline_glyph(glyph) {
            let bounds = outline.px_bounds();
            outline.draw(|gx, gy, coverage| {
                let px_x = bounds.min.x as i32 + gx as i32;
                let px_y = bounds.min.y as i32 + gy as i32;
                blend_pixel(pixmap, px_x, px_y, color, coverage);
            });
        }
    }
    caret
}

/// src-over 混合一个带覆盖度的文字像素
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, (r, g, b): (u8, u8, u8), coverage: f32) {
    let w = pixmap.width() as i32;
    let h = pixmap.height() as i32;
    if x < 0 || y < 0 || x >= w || y >= h {
        return;
    }

    let a = (coverage.clamp(0.0, 1.0) * 255.0 + 0.5) as u16;
    if a == 0 {
        return;
    }
    let inv = 255 - a;

    let idx = (y * w + x) as usize;
    let pixels = pixmap.pixels_mut();
    let dst = pixels[idx];

    let out_a = (a + dst.alpha() as u16 * inv / 255).min(255) as u8;
    let out_r = (((r as u16 * a) / 255 + dst.red() as u16 * inv / 255) as u8).min(out_a);
    let out_g = (((g as u16 * a) / 255 + dst.green() as u16 * inv / 255) as u8).min(out_a);
    let out_b = (((b as u16 * a) / 255 + dst.blue() as u16 * inv / 255) as u8).min(out_a);

    if let Some(px) = tiny_skia::PremultipliedColorU8::from_rgba(out_r, out_g, out_b, out_a) {
        pixels[idx] = px;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(""), "bnp-card-user.png");
        assert_eq!(export_file_name("01712345678"), "bnp-card-01712345678.png");
    }

    #[test]
    fn test_rgba_premultiply() {
        // 半透明红：通道应按 alpha 预乘
        let pm = rgba_to_pixmap(1, 1, &[255, 0, 0, 128]).unwrap();
        let px = pm.pixels()[0];
        assert_eq!(px.alpha(), 128);
        assert_eq!(px.red(), 128);
        assert_eq!(px.green(), 0);
    }

    #[test]
    fn test_rounded_rect_builds() {
        let path = rounded_rect(0.0, 0.0, 100.0, 60.0, 8.0).unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.height(), 60.0);
    }

    #[test]
    fn test_chip_fallback_draws_pixels() {
        let mut pixmap = Pixmap::new(64, 48).unwrap();
        draw_chip(&mut pixmap, None, 4.0, 4.0, 40.0, 30.0).unwrap();
        let painted = pixmap.pixels().iter().filter(|p| p.alpha() > 0).count();
        assert!(painted > 100);
    }

    #[test]
    fn test_logo_fallback_draws_pixels() {
        let mut pixmap = Pixmap::new(48, 48).unwrap();
        draw_logo(&mut pixmap, None, 4.0, 4.0, 32.0).unwrap();
        assert!(pixmap.pixels().iter().any(|p| p.alpha() > 0));
    }

    #[test]
    fn test_card_pixmap_dimensions_and_corners() {
        // 3 倍密度；圆角外透明，卡身内不透明
        let pm = new_card_pixmap(CardTheme::for_card(None)).unwrap();
        assert_eq!(pm.width(), CARD_WIDTH * EXPORT_SCALE);
        assert_eq!(pm.height(), CARD_HEIGHT * EXPORT_SCALE);
        assert_eq!(pm.width(), 1140);
        assert_eq!(pm.height(), 720);

        let corner = pm.pixels()[0];
        assert_eq!(corner.alpha(), 0);

        let cx = (pm.width() / 2) as usize;
        let cy = (pm.height() / 2) as usize;
        let center = pm.pixels()[cy * pm.width() as usize + cx];
        assert_eq!(center.alpha(), 255);
    }

    #[test]
    fn test_text_width_tracking_between_glyphs_only() {
        // 间距只加在字形之间：n 个字形多出 (n-1) * tracking
        let Ok(font) = load_font() else {
            return;
        };
        let plain = text_width(&font, 20.0, 0.0, "BNP");
        let tracked = text_width(&font, 20.0, 5.0, "BNP");
        assert!((tracked - plain - 10.0).abs() < 1e-3);

        // 单个字形不受间距影响
        let one_plain = text_width(&font, 20.0, 0.0, "B");
        let one_tracked = text_width(&font, 20.0, 5.0, "B");
        assert!((one_tracked - one_plain).abs() < 1e-3);
    }

    #[test]
    fn test_blend_pixel_bounds_checked() {
        let mut pixmap = Pixmap::new(4, 4).unwrap();
        // 越界坐标直接忽略，不 panic
        blend_pixel(&mut pixmap, -1, 0, (255, 255, 255), 1.0);
        blend_pixel(&mut pixmap, 10, 10, (255, 255, 255), 1.0);
        blend_pixel(&mut pixmap, 1, 1, (255, 255, 255), 1.0);
        assert_eq!(pixmap.pixels()[5].alpha(), 255);
    }
}

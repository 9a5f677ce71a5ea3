//! Renders a [`Scene`] into a self-contained animated SVG.
//!
//! Motion is expressed as SMIL key frames sampled from the scene's float,
//! spin and particle functions, so the browser drives every frame itself.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use super::scene::{
    particle_at, Pointer, ProjectedShape, Scene, ShapeKind, Viewport, FRAMES_PER_SECOND, PARTICLE_COUNT, TIME_STEP,
};

const KEYFRAMES: usize = 24;
const STROKE: &str = "rgba(255, 255, 255, 0.4)";

/// Real seconds the animation needs to cover `span` units of scene time.
fn seconds_for(span: f64) -> f64 {
    span / (TIME_STEP * FRAMES_PER_SECOND)
}

/// `KEYFRAMES + 1` samples of `f` over one period starting at `t0`, closed so the loop is seamless.
fn sample(t0: f64, period: f64, f: impl Fn(f64) -> f64) -> String {
    (0..=KEYFRAMES)
        .map(|k| format!("{:.2}", f(t0 + period * k as f64 / KEYFRAMES as f64)))
        .collect::<Vec<_>>()
        .join(";")
}

fn translate_x(out: &mut String, values: &str, dur: f64) {
    let pairs: Vec<String> = values.split(';').map(|v| format!("{v} 0")).collect();
    animate_translate(out, &pairs.join(";"), dur);
}

fn translate_y(out: &mut String, values: &str, dur: f64) {
    let pairs: Vec<String> = values.split(';').map(|v| format!("0 {v}")).collect();
    animate_translate(out, &pairs.join(";"), dur);
}

fn animate_translate(out: &mut String, values: &str, dur: f64) {
    let _ = write!(
        out,
        r#"<animateTransform attributeName="transform" type="translate" values="{values}" dur="{dur:.2}s" repeatCount="indefinite"/>"#
    );
}

pub fn render_svg(scene: &Scene, viewport: Viewport) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let (cx, cy) = viewport.center();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid slice" aria-hidden="true">"#,
        w = viewport.width,
        h = viewport.height
    );
    out.push_str(concat!(
        r#"<defs><radialGradient id="hero-bg" cx="50%" cy="50%" r="75%">"#,
        r#"<stop offset="0" stop-color="rgb(59,130,246)" stop-opacity="0.08"/>"#,
        r#"<stop offset="0.5" stop-color="rgb(249,115,22)" stop-opacity="0.05"/>"#,
        r#"<stop offset="1" stop-color="rgb(139,92,246)" stop-opacity="0.03"/>"#,
        r#"</radialGradient></defs>"#
    ));
    let _ = write!(out, r#"<rect width="{}" height="{}" fill="url(#hero-bg)"/>"#, viewport.width, viewport.height);

    for line in scene.connections(viewport) {
        let _ = write!(
            out,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="white" stroke-opacity="{:.3}" stroke-width="0.5"/>"#,
            line.x1, line.y1, line.x2, line.y2, line.alpha
        );
    }

    // Shapes are placed at their rest position; float offsets come from the animations.
    for projected in scene.project(viewport, Pointer::default()) {
        render_shape(&mut out, scene, &projected, cx, cy);
    }

    for i in 0..PARTICLE_COUNT {
        render_particle(&mut out, scene.time, i, viewport);
    }

    out.push_str("</svg>");
    out
}

fn render_shape(out: &mut String, scene: &Scene, p: &ProjectedShape, cx: f64, cy: f64) {
    let shape = &scene.shapes[p.index];
    let scale = (p.size / shape.size).max(f64::EPSILON);
    let t0 = scene.time;
    let (speed, i) = (shape.speed, p.index as f64);

    // Anchor at the un-floated projected origin.
    let _ = write!(out, r#"<g transform="translate({:.1} {:.1})">"#, cx + shape.x * scale, cy + shape.y * scale);

    let period_x = TAU / speed;
    out.push_str("<g>");
    translate_x(out, &sample(t0, period_x, |t| (t * speed + i * 0.5).sin() * 20.0 * scale), seconds_for(period_x));

    let period_y = TAU / (speed * 0.7);
    out.push_str("<g>");
    translate_y(out, &sample(t0, period_y, |t| (t * speed * 0.7 + i * 0.3).cos() * 15.0 * scale), seconds_for(period_y));

    let spin = shape.kind.spin_rate(speed) * FRAMES_PER_SECOND;
    let start = p.angle.to_degrees();
    let _ = write!(
        out,
        r#"<g opacity="{:.2}" fill="{}" stroke="{}" stroke-width="{:.2}"><animateTransform attributeName="transform" type="rotate" from="{:.1}" to="{:.1}" dur="{:.2}s" repeatCount="indefinite"/>"#,
        p.alpha,
        p.color,
        STROKE,
        p.line_width,
        start,
        start + 360.0,
        TAU / spin
    );
    draw_kind(out, p.kind, p.size);
    out.push_str("</g></g></g></g>");
}

fn draw_kind(out: &mut String, kind: ShapeKind, size: f64) {
    let half = size / 2.0;
    match kind {
        ShapeKind::Building => {
            let (w, h) = (size, size * 1.5);
            let _ = write!(out, r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}"/>"#, -w / 2.0, -h / 2.0, w, h);
            for col in 0..3 {
                for row in 0..4 {
                    let wx = -w / 2.0 + (w / 4.0) * (col as f64 + 0.5);
                    let wy = -h / 2.0 + (h / 5.0) * (row as f64 + 0.5);
                    let _ = write!(
                        out,
                        r#"<rect x="{:.1}" y="{:.1}" width="6" height="6" fill="rgba(255,255,255,0.3)" stroke="none"/>"#,
                        wx - 3.0,
                        wy - 3.0
                    );
                }
            }
            let _ = write!(
                out,
                r#"<polygon points="{:.1},{:.1} 0,{:.1} {:.1},{:.1}" fill="rgba(255,255,255,0.2)" stroke="none"/>"#,
                -w / 2.0,
                -h / 2.0,
                -h / 2.0 - 15.0,
                w / 2.0,
                -h / 2.0
            );
        }
        ShapeKind::Crane => {
            let (base, h) = (size * 0.3, size * 1.8);
            let _ = write!(
                out,
                concat!(
                    r#"<g stroke="none">"#,
                    r#"<rect x="{bx:.1}" y="{by:.1}" width="{bw:.1}" height="20"/>"#,
                    r#"<rect x="-3" y="{top:.1}" width="6" height="{h:.1}"/>"#,
                    r#"<rect x="-3" y="{top:.1}" width="{jib:.1}" height="4"/>"#,
                    r#"<rect x="{cj:.1}" y="{top:.1}" width="{cjw:.1}" height="3"/>"#,
                    r#"</g>"#,
                    r#"<line x1="{hx:.1}" y1="{hy1:.1}" x2="{hx:.1}" y2="{hy2:.1}" stroke-dasharray="2 2"/>"#
                ),
                bx = -base / 2.0,
                by = h / 2.0 - 10.0,
                bw = base,
                top = -h / 2.0,
                h = h,
                jib = size * 0.8,
                cj = -size * 0.3,
                cjw = size * 0.3,
                hx = size * 0.6,
                hy1 = -h / 2.0 + 4.0,
                hy2 = -h / 2.0 + 30.0
            );
        }
        ShapeKind::Blueprint => {
            let h = size * 0.7;
            let _ = write!(
                out,
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="rgba(135,206,235,0.3)"/>"#,
                -half, -half, size, h
            );
            out.push_str(r#"<g stroke="rgba(255,255,255,0.8)" stroke-width="1">"#);
            for k in 1..4 {
                let x = -half + (size / 4.0) * k as f64;
                let _ = write!(out, r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}"/>"#, -half, -half + h);
            }
            for k in 1..3 {
                let y = -half + (h / 3.0) * k as f64;
                let _ = write!(out, r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}"/>"#, -half, half);
            }
            out.push_str("</g>");
        }
        ShapeKind::Gear => {
            let (outer, inner, teeth) = (half, half * 0.6, 8);
            let points: Vec<String> = (0..teeth * 2)
                .map(|k| {
                    let angle = k as f64 * PI / teeth as f64;
                    let r = if k % 2 == 0 { outer } else { inner };
                    format!("{:.1},{:.1}", angle.cos() * r, angle.sin() * r)
                })
                .collect();
            let _ = write!(out, r#"<polygon points="{}"/>"#, points.join(" "));
            let _ = write!(out, r#"<circle r="{:.1}" fill="rgba(0,0,0,0.3)" stroke="none"/>"#, inner * 0.4);
        }
        ShapeKind::Pyramid => {
            let _ = write!(out, r#"<polygon points="0,{:.1} {:.1},{:.1} {:.1},{:.1}"/>"#, -half, -half, half, half, half);
            let _ = write!(
                out,
                r#"<polygon points="0,{:.1} {:.1},{:.1} {:.1},{:.1} {:.1},{:.1}" fill="rgba(255,255,255,0.2)" stroke="none"/>"#,
                -half,
                half,
                half,
                size / 3.0,
                size / 3.0,
                size / 6.0,
                -size / 6.0
            );
        }
    }
}

fn render_particle(out: &mut String, t0: f64, index: usize, viewport: Viewport) {
    let (cx, cy) = viewport.center();
    let i = index as f64;
    let start = particle_at(t0, index, viewport);

    let period_x = TAU / 0.5;
    let period_y = TAU / 0.3;
    let period_a = TAU / 2.0;

    out.push_str("<g>");
    translate_x(out, &sample(t0, period_x, |t| (t * 0.5 + i * 0.3).sin() * 200.0 + cx), seconds_for(period_x));
    out.push_str("<g>");
    translate_y(out, &sample(t0, period_y, |t| (t * 0.3 + i * 0.7).cos() * 150.0 + cy), seconds_for(period_y));
    let _ = write!(
        out,
        r#"<circle r="{:.2}" fill="rgb(59,130,246)" opacity="{:.2}"><animate attributeName="opacity" values="{}" dur="{:.2}s" repeatCount="indefinite"/></circle>"#,
        start.radius,
        start.alpha,
        sample(t0, period_a, |t| particle_at(t, index, viewport).alpha),
        seconds_for(period_a)
    );
    out.push_str("</g></g>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_is_self_contained_and_declarative() {
        let svg = render_svg(&Scene::generate(42), Viewport::HERO);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("<script"));
        assert!(svg.contains(r#"repeatCount="indefinite""#));
    }

    #[test]
    fn one_circle_group_per_particle() {
        let svg = render_svg(&Scene::generate(42), Viewport::HERO);
        assert_eq!(svg.matches(r#"fill="rgb(59,130,246)""#).count(), PARTICLE_COUNT);
    }

    #[test]
    fn rendering_is_deterministic_for_a_seed() {
        let a = render_svg(&Scene::generate(11), Viewport::HERO);
        let b = render_svg(&Scene::generate(11), Viewport::HERO);
        assert_eq!(a, b);
    }

    #[test]
    fn samples_close_the_loop() {
        let values = sample(0.0, TAU, |t| t.sin());
        let frames: Vec<&str> = values.split(';').collect();
        assert_eq!(frames.len(), KEYFRAMES + 1);
        assert_eq!(frames.first(), Some(&"0.00"));
        assert!(frames.last().is_some_and(|v| *v == "0.00" || *v == "-0.00"));
    }

    #[test]
    fn one_scene_second_is_sixty_frames() {
        assert!((seconds_for(TIME_STEP * 60.0) - 1.0).abs() < 1e-9);
    }
}

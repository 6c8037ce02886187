//! Render benchmark: Measure a full frame from buffer to escape bytes.
//!
//! Target: well under a millisecond for 80x24 and 200x60 terminals

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use noed::terminal::OutputBuffer;
use noed::{EditorConfig, Mode, Motion, TextBuffer, Viewport};

fn sample_buffer() -> TextBuffer {
    let text: String = (0..5_000)
        .map(|i| format!("{i:>5}: fn render(&mut self) -> Option<ScreenCursor> {{ }}\n"))
        .collect();
    TextBuffer::from_bytes(text.into_bytes())
}

fn render_frame(c: &mut Criterion) {
    let config = EditorConfig::default();
    for (name, rows, cols) in [("render_80x24", 24, 80), ("render_200x60", 60, 200)] {
        let buffer = sample_buffer();
        let mut viewport = Viewport::new(rows, cols, &config);
        let mut out = OutputBuffer::new();

        c.bench_function(name, |b| {
            b.iter(|| {
                if let Some(cursor) = viewport.render(black_box(&buffer), Mode::Insert) {
                    out.clear();
                    out.frame(viewport.grid(), cursor);
                }
                black_box(out.len())
            });
        });
    }
}

fn render_while_scrolling(c: &mut Criterion) {
    let config = EditorConfig::default();
    let mut buffer = sample_buffer();
    let mut viewport = Viewport::new(24, 80, &config);

    c.bench_function("render_scroll_line_down", |b| {
        b.iter(|| {
            buffer.apply(Motion::LineDown);
            if buffer.cursor() == buffer.len() {
                buffer.apply(Motion::BufferStart);
            }
            black_box(viewport.render(&buffer, Mode::Normal))
        });
    });
}

criterion_group!(benches, render_frame, render_while_scrolling);
criterion_main!(benches);

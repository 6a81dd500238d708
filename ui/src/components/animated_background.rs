use dioxus::prelude::*;

/// Slots a blob can occupy: `(top %, left %, size rem)`
const SLOTS: [(u8, u8, u8); 6] = [
    (8, 12, 22),
    (55, 70, 26),
    (20, 78, 18),
    (68, 18, 20),
    (38, 42, 30),
    (2, 55, 16),
];

const COLORS: [&str; 4] = [
    "bg-venue-accent/30",
    "bg-fuchsia-500/20",
    "bg-sky-500/20",
    "bg-amber-400/20",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blob {
    pub top: u8,
    pub left: u8,
    pub size: u8,
    pub color: &'static str,
}

/// Where each blob sits for a given animation phase. Every phase moves each
/// blob to the next slot, so blobs never overlap the same slot.
pub fn blob_layout(count: usize, phase: usize) -> Vec<Blob> {
    (0..count.min(SLOTS.len()))
        .map(|i| {
            let (top, left, size) = SLOTS[(i + phase) % SLOTS.len()];
            Blob {
                top,
                left,
                size,
                color: COLORS[i % COLORS.len()],
            }
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
async fn drift(mut phase: Signal<usize>, every_ms: u32) {
    loop {
        gloo_timers::future::TimeoutFuture::new(every_ms).await;
        phase += 1;
    }
}

// No timers outside the browser; the blobs stay put.
#[cfg(not(target_arch = "wasm32"))]
async fn drift(_phase: Signal<usize>, _every_ms: u32) {}

/// Decorative drifting gradient blobs behind page content.
#[component]
pub fn AnimatedBackground(
    #[props(default = 4)] blobs: usize,
    #[props(default = 7_000)] drift_ms: u32,
) -> Element {
    let phase = use_signal(|| 0usize);
    use_future(move || drift(phase, drift_ms));

    let layout = blob_layout(blobs, phase());

    rsx! {
      div { class: "absolute inset-0 overflow-hidden pointer-events-none -z-10", "aria-hidden": "true",
        for (i, blob) in layout.into_iter().enumerate() {
          div {
            key: "{i}",
            class: "absolute rounded-full blur-3xl animate-float {blob.color}",
            style: "top: {blob.top}%; left: {blob.left}%; width: {blob.size}rem; height: {blob.size}rem; transition: top {drift_ms}ms ease-in-out, left {drift_ms}ms ease-in-out;",
          }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_layout_rotates_slots() {
        let first = blob_layout(3, 0);
        let next = blob_layout(3, 1);

        assert_eq!(first.len(), 3);
        assert_eq!((next[0].top, next[0].left), (first[1].top, first[1].left));
        assert_eq!(next[0].color, first[0].color);
    }

    #[test]
    fn test_blob_layout_caps_count() {
        assert_eq!(blob_layout(50, 0).len(), SLOTS.len());
        assert!(blob_layout(0, 3).is_empty());
        assert_eq!(blob_layout(2, SLOTS.len()), blob_layout(2, 0));
    }
}

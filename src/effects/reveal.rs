use crate::effects::{
    context::EffectCtx,
    values::{Contribution, Reveal},
};

/// Reveal a prefix proportional to elapsed local time; caret blinks while incomplete.
pub(crate) fn typewriter(ctx: &EffectCtx<'_>) -> Contribution {
    let timing = &ctx.tuning.timing;
    let total = ctx.text.chars().count();
    let progress = if timing.typewriter_secs > 0.0 {
        (ctx.local_secs() / timing.typewriter_secs).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let chars = ((total as f64) * progress).floor() as usize;
    let chars = chars.min(total);
    let blink = timing.caret_blink_frames.max(1);
    Contribution {
        reveal: Some(Reveal {
            chars,
            caret: chars < total && (ctx.local.0 / blink) % 2 == 0,
        }),
        ..Contribution::default()
    }
}

/// First `chars` characters of `text`, never splitting a code point.
pub(crate) fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#![no_main]

use dashtheme_color::Color;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(color) = text.parse::<Color>() else {
        return;
    };

    // Display output must parse back to the same color.
    let printed = color.to_string();
    let reparsed: Color = printed
        .parse()
        .unwrap_or_else(|err| panic!("display output {printed:?} failed to parse: {err}"));
    assert_eq!(reparsed, color, "round trip through {printed:?} changed the color");
});

// src/parts.rs
//
// Preset pad shapes and pin tables for the parts the library ships with.
// Pin tables are shared, read-only statics: every instance of a part
// holds the same `Arc` slice, so placement never copies pad geometry and
// no instance can alter another's pins.

use std::sync::{Arc, LazyLock};

use crate::component::{Component, Pin};
use crate::shapes::{rectangle, Shape};

// --- Discrete passives (1206) ---

static PAD_1206: LazyLock<Shape> = LazyLock::new(|| rectangle(-0.032, 0.032, -0.034, 0.034));

static PINS_1206: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    Arc::from(vec![
        Pin::new(-0.06, 0.0, PAD_1206.clone()),
        Pin::new(0.06, 0.0, PAD_1206.clone()),
    ])
});

/// 1206 resistor.
pub fn resistor_1206(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_1206.clone()).with_prefix("R")
}

/// 1206 capacitor.
pub fn capacitor_1206(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_1206.clone()).with_prefix("C")
}

// --- Connectors ---

static PAD_USB_TRACE: LazyLock<Shape> =
    LazyLock::new(|| rectangle(-0.0075, 0.0075, -0.04, 0.04));
static PAD_USB_FOOT: LazyLock<Shape> = LazyLock::new(|| rectangle(-0.049, 0.049, -0.043, 0.043));

static PINS_USB_MINI_B: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    Arc::from(vec![
        Pin::named(0.063, 0.36, PAD_USB_TRACE.clone(), "G"),
        Pin::new(0.0315, 0.36, PAD_USB_TRACE.clone()),
        Pin::named(0.0, 0.36, PAD_USB_TRACE.clone(), "+"),
        Pin::named(-0.0315, 0.36, PAD_USB_TRACE.clone(), "-"),
        Pin::named(-0.063, 0.36, PAD_USB_TRACE.clone(), "V"),
        Pin::new(0.165, 0.33, PAD_USB_FOOT.clone()),
        Pin::new(-0.165, 0.33, PAD_USB_FOOT.clone()),
        Pin::new(0.165, 0.12, PAD_USB_FOOT.clone()),
        Pin::new(-0.165, 0.12, PAD_USB_FOOT.clone()),
    ])
});

/// USB mini-B connector (Hirose UX60-MB-5ST).
pub fn usb_mini_b(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_USB_MINI_B.clone()).with_prefix("J")
}

static PAD_HEADER: LazyLock<Shape> = LazyLock::new(|| rectangle(-0.06, 0.06, -0.025, 0.025));

static PINS_HEADER_4: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    Arc::from(vec![
        Pin::new(-0.107, 0.05, PAD_HEADER.clone()),
        Pin::new(-0.107, -0.05, PAD_HEADER.clone()),
        Pin::new(0.107, -0.05, PAD_HEADER.clone()),
        Pin::new(0.107, 0.05, PAD_HEADER.clone()),
    ])
});

/// 4-pin header (FCI 95278-101A04LF Bergstik 2x2x0.1).
pub fn header_4(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_HEADER_4.clone()).with_prefix("J")
}

static PINS_HEADER_ISP: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    Arc::from(vec![
        Pin::named(-0.107, 0.1, PAD_HEADER.clone(), "GND"),
        Pin::named(-0.107, 0.0, PAD_HEADER.clone(), "MOSI"),
        Pin::named(-0.107, -0.1, PAD_HEADER.clone(), "V"),
        Pin::named(0.107, -0.1, PAD_HEADER.clone(), "MISO"),
        Pin::named(0.107, 0.0, PAD_HEADER.clone(), "SCK"),
        Pin::named(0.107, 0.1, PAD_HEADER.clone(), "RST"),
    ])
});

/// ISP programming header (FCI 95278-101A06LF Bergstik 2x3x0.1).
pub fn header_isp(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_HEADER_ISP.clone()).with_prefix("J")
}

static PINS_HEADER_FTDI: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    Arc::from(vec![
        Pin::named(0.0, 0.25, PAD_HEADER.clone(), "GND"),
        Pin::named(0.0, 0.15, PAD_HEADER.clone(), "CTS"),
        Pin::named(0.0, 0.05, PAD_HEADER.clone(), "VCC"),
        Pin::named(0.0, -0.05, PAD_HEADER.clone(), "TX"),
        Pin::named(0.0, -0.15, PAD_HEADER.clone(), "RX"),
        Pin::named(0.0, -0.25, PAD_HEADER.clone(), "RTS"),
    ])
});

/// FTDI cable header.
pub fn header_ftdi(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_HEADER_FTDI.clone()).with_prefix("J")
}

// --- SOT-23 parts ---

static PAD_SOT23: LazyLock<Shape> = LazyLock::new(|| rectangle(-0.02, 0.02, -0.012, 0.012));

static PINS_NMOS_SOT23: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    Arc::from(vec![
        Pin::named(0.045, -0.0375, PAD_SOT23.clone(), "G"),
        Pin::named(0.045, 0.0375, PAD_SOT23.clone(), "S"),
        Pin::named(-0.045, 0.0, PAD_SOT23.clone(), "D"),
    ])
});

/// N-channel MOSFET, SOT-23 (Fairchild NDS355AN).
pub fn nmos_sot23(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_NMOS_SOT23.clone()).with_prefix("Q")
}

static PINS_PMOS_SOT23: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    Arc::from(vec![
        Pin::named(-0.045, -0.0375, PAD_SOT23.clone(), "G"),
        Pin::named(-0.045, 0.0375, PAD_SOT23.clone(), "S"),
        Pin::named(0.045, 0.0, PAD_SOT23.clone(), "D"),
    ])
});

/// P-channel MOSFET, SOT-23 (Fairchild NDS356AP).
pub fn pmos_sot23(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_PMOS_SOT23.clone()).with_prefix("Q")
}

static PINS_REGULATOR_SOT23: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    Arc::from(vec![
        Pin::named(-0.045, -0.0375, PAD_SOT23.clone(), "Out"),
        Pin::named(-0.045, 0.0375, PAD_SOT23.clone(), "In"),
        Pin::named(0.045, 0.0, PAD_SOT23.clone(), "GND"),
    ])
});

/// SOT-23 voltage regulator.
pub fn regulator_sot23(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_REGULATOR_SOT23.clone()).with_prefix("U")
}

// --- Atmel microcontrollers ---

static PAD_SOIC: LazyLock<Shape> = LazyLock::new(|| rectangle(-0.041, 0.041, -0.015, 0.015));

fn soic_bank(x: f32, y_top: f32, step: f32, names: &[&str]) -> Vec<Pin> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Pin::named(x, y_top - step * i as f32, PAD_SOIC.clone(), name))
        .collect()
}

static PINS_ATTINY45: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    let mut pins = soic_bank(-0.14, 0.075, 0.05, &["RST", "PB3", "PB4", "GND"]);
    pins.extend(soic_bank(0.14, -0.075, -0.05, &["PB0", "PB1", "PB2", "VCC"]));
    Arc::from(pins)
});

/// ATtiny45 in SOIC-8.
pub fn attiny45_soic(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_ATTINY45.clone()).with_prefix("U")
}

static PINS_ATTINY44: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    let mut pins = soic_bank(
        -0.12,
        0.15,
        0.05,
        &["VCC", "PB0", "PB1", "PB3", "PB2", "PA7", "PA6"],
    );
    pins.extend(soic_bank(
        0.12,
        -0.15,
        -0.05,
        &["PA5", "PA4", "PA3", "PA2", "PA1", "PA0", "GND"],
    ));
    Arc::from(pins)
});

/// ATtiny44 in SOIC-14.
pub fn attiny44_soic(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_ATTINY44.clone()).with_prefix("U")
}

static PAD_TQFP_H: LazyLock<Shape> = LazyLock::new(|| rectangle(-0.025, 0.025, -0.008, 0.008));
static PAD_TQFP_V: LazyLock<Shape> = LazyLock::new(|| rectangle(-0.008, 0.008, -0.025, 0.025));

static PINS_ATMEGA88: LazyLock<Arc<[Pin]>> = LazyLock::new(|| {
    let mut pins = Vec::with_capacity(32);

    // Left bank, top to bottom.
    let mut y = 0.1085;
    for name in ["PD3", "PD4", "GND", "VCC", "GND", "VCC", "PB6", "PB7"] {
        pins.push(Pin::named(-0.18, y, PAD_TQFP_H.clone(), name));
        y -= 0.031;
    }
    // Bottom bank, left to right.
    let mut x = -0.1085;
    for name in ["PD5", "PD6", "PD7", "PB0", "PB1", "PB2", "PB3", "PB4"] {
        pins.push(Pin::named(x, -0.18, PAD_TQFP_V.clone(), name));
        x += 0.031;
    }
    // Right bank, bottom to top.
    let mut y = -0.1085;
    for name in ["PB5", "AVCC", "ADC6", "AREF", "GND", "ADC7", "PC0", "PC1"] {
        pins.push(Pin::named(0.18, y, PAD_TQFP_H.clone(), name));
        y += 0.031;
    }
    // Top bank, right to left.
    let mut x = 0.1085;
    for name in ["PC2", "PC3", "PC4", "PC5", "PC6", "PD0", "PD1", "PD2"] {
        pins.push(Pin::named(x, 0.18, PAD_TQFP_V.clone(), name));
        x -= 0.031;
    }

    Arc::from(pins)
});

/// ATmega88 in TQFP-32.
pub fn atmega88_tqfp(x: f32, y: f32, rotation: f32, name: &str) -> Component {
    Component::new(x, y, rotation, name, PINS_ATMEGA88.clone()).with_prefix("U")
}

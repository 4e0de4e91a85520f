//! Demo commands exercising every signature kind.
//!
//! These stand in for the device drivers that would register commands on a
//! real target; each handler just reports what it would do.

use ember_console::Interpreter;

/// Register one demo command per signature kind.
pub fn register_demo_commands(console: &mut Interpreter<'_>) {
    console.add_command_noargs("beep", || {
        println!("beep!");
    });
    console.add_command_boolean("relay", |on| {
        println!("relay {}", if on { "energized" } else { "released" });
    });
    console.add_command_char("port", |port| {
        println!("selected port {port}");
    });
    console.add_command_int("led", |level| {
        println!("led level set to {level}");
    });
    console.add_command_char_int("pwm", |channel, duty| {
        println!("pwm channel {channel} duty {duty}");
    });
    console.add_command_string("echo", |text| {
        println!("{text}");
    });
    console.add_command_char_string("tag", |pin, name| {
        println!("pin {pin} tagged {name:?}");
    });
    console.add_command_int_string("label", |zone, name| {
        println!("zone {zone} labeled {name:?}");
    });
}

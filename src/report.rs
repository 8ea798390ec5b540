// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rendering of state tables and write outcomes.

use std::fmt::Write as _;
use std::process::ExitCode;

use crate::executor::ResultMap;
use crate::state::{ColorMode, Light, LightState};
use crate::types::LightId;

/// Rendered output plus the outcome it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Text to print on stdout, newline-terminated.
    pub text: String,
    /// Whether the command fully succeeded.
    pub success: bool,
}

impl Report {
    /// Maps the outcome onto a process exit code: 0 on success, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Text for the COLOR column.
///
/// Color temperature mode shows the mired value; otherwise a non-zero hue is
/// shown, then non-zero xy coordinates, and `-` when there is nothing to show.
#[must_use]
pub fn color_summary(state: &LightState) -> String {
    if state.color_mode == ColorMode::None {
        return "-".to_string();
    }
    if state.color_mode == ColorMode::ColorTemp
        && let Some(ct) = state.color_temp
    {
        return ct.to_string();
    }
    match (state.hue, state.xy) {
        (Some(hue), _) if hue > 0 => hue.to_string(),
        (_, Some((x, y))) if x > 0.0 || y > 0.0 => format!("{x}, {y}"),
        _ => "-".to_string(),
    }
}

/// Renders the state table for a report command.
///
/// Columns are ID, NAME, POWER, BRIGHTNESS and COLOR; the NAME column is as
/// wide as the longest name. A report always succeeds once it is rendered.
///
/// # Examples
///
/// ```
/// use hue_client::report::render_states;
/// use hue_client::state::Light;
///
/// let light: Light = serde_json::from_str(
///     r#"{"name": "Desk", "state": {"on": true, "bri": 200, "colormode": "ct", "ct": 300}}"#,
/// ).unwrap();
/// let report = render_states(&[("1".into(), light)]);
///
/// assert_eq!(report.text, "ID NAME POWER BRIGHTNESS COLOR\n1  Desk on    200        300\n");
/// assert!(report.success);
/// ```
#[must_use]
pub fn render_states(lights: &[(LightId, Light)]) -> Report {
    let name_width = lights
        .iter()
        .map(|(_, light)| light.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut text = String::new();
    push_row(&mut text, name_width, ["ID", "NAME", "POWER", "BRIGHTNESS", "COLOR"]);

    for (id, light) in lights {
        let state = &light.state;
        let power = if state.on { "on" } else { "off" };
        push_row(
            &mut text,
            name_width,
            [
                id.as_str(),
                &light.name,
                power,
                &state.brightness.to_string(),
                &color_summary(state),
            ],
        );
    }

    Report {
        text,
        success: true,
    }
}

fn push_row(text: &mut String, name_width: usize, cells: [&str; 5]) {
    let [id, name, power, brightness, color] = cells;
    let line = format!("{id:<2} {name:<name_width$} {power:<5} {brightness:<10} {color}");
    let _ = writeln!(text, "{}", line.trim_end());
}

/// Renders the outcome of a write.
///
/// A single target gets one status line; several targets get a LIGHT /
/// RESPONSE table with the failure detail of each rejected light. The report
/// succeeds only if every light succeeded.
#[must_use]
pub fn render_results(results: &ResultMap) -> Report {
    let mut text = String::new();

    if let [(id, result)] = results.as_slice() {
        let status = if result.success {
            "updated successfully"
        } else {
            "failed to update"
        };
        let _ = writeln!(text, "Light {id} {status}.");
    } else {
        let _ = writeln!(text, "LIGHT  RESPONSE");
        for (id, result) in results.iter() {
            let response = if result.success {
                "Updated successfully".to_string()
            } else {
                format!("Failed ({})", result.detail)
            };
            let _ = writeln!(text, "{:<7}{response}", id.as_str());
        }
    }

    Report {
        text,
        success: results.all_succeeded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::LightResult;

    fn light(name: &str, state: LightState) -> Light {
        Light {
            name: name.to_string(),
            state,
        }
    }

    #[test]
    fn color_temp_mode_shows_mired() {
        let state = LightState {
            color_mode: ColorMode::ColorTemp,
            color_temp: Some(366),
            hue: Some(8000),
            ..Default::default()
        };
        assert_eq!(color_summary(&state), "366");
    }

    #[test]
    fn hue_shown_when_positive() {
        let state = LightState {
            color_mode: ColorMode::HueSat,
            hue: Some(21845),
            xy: Some((0.2, 0.7)),
            ..Default::default()
        };
        assert_eq!(color_summary(&state), "21845");
    }

    #[test]
    fn xy_shown_when_hue_is_zero() {
        let state = LightState {
            color_mode: ColorMode::Xy,
            hue: Some(0),
            xy: Some((0.5128, 0.4147)),
            ..Default::default()
        };
        assert_eq!(color_summary(&state), "0.5128, 0.4147");
    }

    #[test]
    fn dash_when_nothing_to_show() {
        assert_eq!(color_summary(&LightState::default()), "-");
        let state = LightState {
            color_mode: ColorMode::Xy,
            hue: Some(0),
            xy: Some((0.0, 0.0)),
            ..Default::default()
        };
        assert_eq!(color_summary(&state), "-");
    }

    #[test]
    fn state_table_widths_follow_longest_name() {
        let lights = vec![
            (
                LightId::from("1"),
                light(
                    "Kitchen ceiling",
                    LightState {
                        on: true,
                        brightness: 254,
                        ..Default::default()
                    },
                ),
            ),
            (LightId::from("12"), light("Hall", LightState::default())),
        ];
        let report = render_states(&lights);
        let expected = "\
ID NAME            POWER BRIGHTNESS COLOR
1  Kitchen ceiling on    254        -
12 Hall            off   0          -
";
        assert_eq!(report.text, expected);
        assert!(report.success);
    }

    #[test]
    fn single_target_success_line() {
        let results: ResultMap = [(LightId::from("5"), LightResult::ok())].into_iter().collect();
        let report = render_results(&results);
        assert_eq!(report.text, "Light 5 updated successfully.\n");
        assert!(report.success);
    }

    #[test]
    fn single_target_failure_line() {
        let results: ResultMap = [(LightId::from("5"), LightResult::failed("nope"))]
            .into_iter()
            .collect();
        let report = render_results(&results);
        assert_eq!(report.text, "Light 5 failed to update.\n");
        assert!(!report.success);
    }

    #[test]
    fn multi_target_table_in_order() {
        let results: ResultMap = [
            (LightId::from("2"), LightResult::ok()),
            (LightId::from("4"), LightResult::failed("Unknown error.")),
            (LightId::from("6"), LightResult::ok()),
        ]
        .into_iter()
        .collect();
        let report = render_results(&results);
        let expected = "\
LIGHT  RESPONSE
2      Updated successfully
4      Failed (Unknown error.)
6      Updated successfully
";
        assert_eq!(report.text, expected);
        assert!(!report.success);
    }

    #[test]
    fn multi_target_all_success() {
        let results: ResultMap = ["1", "2"]
            .into_iter()
            .map(|id| (LightId::from(id), LightResult::ok()))
            .collect();
        assert!(render_results(&results).success);
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CzConfig;

/// Get the default configuration.
pub fn default_config() -> CzConfig {
    CzConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cz Configuration File
# SPDX-License-Identifier: MIT

# Message formatting
[format]
# Line 1 is cropped at this width; body and footer are wrapped at it.
max_line_width = 100

# UI configuration
[ui]
color = true
"#
}

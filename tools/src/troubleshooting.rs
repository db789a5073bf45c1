//! Static connectivity troubleshooting tree.
//!
//! Presentation-side data: a fixed mapping from issue category to an ordered
//! list of instructional steps. The core never sees this.

pub const TECHNICIAN_FOOTER: &str =
    "If these steps don't resolve your issue, you may need technician assistance.";

/// Ordered self-help steps for an issue category, footer included.
/// `None` for an unknown category.
pub fn steps(issue: &str) -> Option<Vec<&'static str>> {
    let steps: &[&'static str] = match issue {
        "no_connection" => &[
            "1. Check if your router is powered on and all lights are normal",
            "2. Restart your router by unplugging it for 30 seconds and plugging it back in",
            "3. Check all cable connections between your devices and the router",
            "4. Try connecting a different device to see if the issue is device-specific",
            "5. Check if there are any known outages in your area",
        ],
        "slow_speed" => &[
            "1. Run a speed test at speedtest.net to confirm your current speeds",
            "2. Restart your router and modem",
            "3. Disconnect devices that may be using bandwidth unnecessarily",
            "4. Try connecting directly with an Ethernet cable to rule out Wi-Fi issues",
            "5. Check for background downloads or updates on your devices",
        ],
        "intermittent" => &[
            "1. Check for loose or damaged cables",
            "2. Move your router to a central location away from interference",
            "3. Change your Wi-Fi channel to avoid congestion",
            "4. Update your router's firmware",
            "5. Check if the issue occurs at specific times of day",
        ],
        "specific_website" => &[
            "1. Check if the website is down for everyone (use downdetector.com)",
            "2. Try accessing the website from a different browser",
            "3. Clear your browser cache and cookies",
            "4. Try accessing the website from a different device",
            "5. Check your firewall or security software settings",
        ],
        "router" => &[
            "1. Power cycle your router (unplug for 30 seconds)",
            "2. Check for firmware updates for your router",
            "3. Reset your router to factory settings if needed",
            "4. Check for overheating (ensure proper ventilation)",
            "5. Verify all indicator lights are functioning normally",
        ],
        _ => return None,
    };
    let mut out = steps.to_vec();
    out.push(TECHNICIAN_FOOTER);
    Some(out)
}

#![no_main]

use farm_plot_simulator::Scenario;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(scenario) = toml::from_str::<Scenario>(text) {
            let _ = scenario.into_coordinator();
        }
    }
});

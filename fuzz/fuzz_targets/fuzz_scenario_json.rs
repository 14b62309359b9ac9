#![no_main]

use farm_plot_simulator::Scenario;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary bytes must never panic; building a coordinator from
    // whatever parses must fail cleanly, not crash.
    if let Ok(scenario) = serde_json::from_slice::<Scenario>(data) {
        let _ = scenario.into_coordinator();
    }
});

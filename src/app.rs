use rtic::app;

use adc_uart::BurstHandoff;

/// Burst slot shared by the ADC interrupt and the idle loop.
static HANDOFF: BurstHandoff = BurstHandoff::new();

#[app(device = crate::hal::stm32, peripherals = true)]
mod app {
    use super::HANDOFF;
    use crate::adc::{BurstResults, BurstTrigger};
    use crate::platform::{AdcInput, Delay, Platform, Uart, Wfe};
    use adc_uart::{AcquisitionController, SampleAcquisitionEngine};

    type Controller = AcquisitionController<BurstTrigger<AdcInput>, Wfe, Uart, Delay>;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        engine: SampleAcquisitionEngine,
        results: BurstResults,
        controller: Controller,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        let config = crate::CONFIG;
        let platform = Platform::startup(cx.core, cx.device, &config);

        let engine = SampleAcquisitionEngine::new(&config);
        let controller = AcquisitionController::new(
            config,
            platform.trigger,
            Wfe,
            platform.uart,
            platform.delay,
        );

        defmt::info!(
            "ADC streamer ready: {=usize} samples per burst, pause every {=u32} bursts",
            config.burst_size.get(),
            config.burst_threshold,
        );

        let local = Local {
            engine,
            results: platform.results,
            controller,
        };

        (Shared {}, local, init::Monotonics())
    }

    #[task(binds = ADC, priority = 2, local = [engine, results])]
    fn adc_complete(cx: adc_complete::Context) {
        cx.local
            .engine
            .on_conversion_complete(cx.local.results, &HANDOFF);
    }

    #[idle(local = [controller])]
    fn idle(cx: idle::Context) -> ! {
        cx.local.controller.run_forever(&HANDOFF)
    }
}

//! Public entry points that are safe to exercise off the browser.

#[test]
fn stop_without_an_active_run_is_a_no_op() {
    let stop: fn() = confetti::stop;
    stop();
    stop();
}

/// Keeps an interrupt typed while a child runs from killing the shell.
///
/// The handler is caught rather than ignored, so `execvp` resets it to the
/// default in every child and the child still dies on Ctrl-C.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        log::debug!("interrupt received; left to the foreground child");
    })
}

use fibre_lifestyle::{from_fn, Container, Lifestyle};

trait Clock: Send + Sync {}
struct SystemClock;
impl Clock for SystemClock {}

trait MailSender: Send + Sync {}
struct SmtpMailSender {
  _host: String,
}
impl MailSender for SmtpMailSender {}

fn main() -> fibre_lifestyle::Result<()> {
  let container = Container::new();

  // Everything that owns a resource lives per scope; the rest is shared.
  container.options().set_lifestyle_selection_behavior(from_fn(|_service, implementation| {
    if implementation.owns_resource() {
      Lifestyle::scoped()
    } else {
      Lifestyle::singleton()
    }
  }))?;

  container.register::<dyn Clock, SystemClock>()?;
  container.register::<dyn MailSender, SmtpMailSender>()?;

  for registration in container.registrations() {
    println!(
      "{} -> {} ({})",
      registration.service_type().name(),
      registration.implementation_type().name(),
      registration.lifestyle()
    );
  }

  // Locks the container; the behavior can no longer be replaced.
  let clock = container.get_registration::<dyn Clock>();
  println!("clock registered: {}", clock.is_some());

  let replaced = container
    .options()
    .set_lifestyle_selection_behavior(from_fn(|_, _| Lifestyle::transient()));
  println!("replacing after lock: {:?}", replaced.map_err(|e| e.to_string()));
  Ok(())
}

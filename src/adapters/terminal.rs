//! Line-oriented front end for a [`ConfiguratorSession`].
//!
//! Each input line is parsed into a [`Command`] and applied to the session;
//! output goes to any `Write` so the whole loop can be driven from tests.

use crate::core::flow::{ConfiguratorSession, DeviceSection, SubmitChannel, View};
use crate::core::selection::MAX_QUANTITY_STEP;
use crate::core::{Category, Navigator};
use crate::domain::model::Device;
use crate::utils::error::{ConfiguratorError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactField {
    SwitchBrand,
    Name,
    Email,
    Phone,
    Notes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Categories,
    Select(Category),
    List,
    Add(String, u32),
    Remove(String, u32),
    Set(ContactField, String),
    Summary,
    Back,
    Send(SubmitChannel),
    New,
    Ideas,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

const HELP: &str = "\
Comandos:
  categories              lista as categorias
  cat <categoria>         muda de categoria (lighting, power, climate, ...)
  list                    equipamentos da categoria ativa
  + <id> [n]              adiciona n unidades (1 por omissão)
  - <id> [n]              remove n unidades
  brand|name|email|phone|notes <texto>
  summary                 ver resumo
  back                    voltar à seleção
  send email|whatsapp     enviar pedido
  new                     nova configuração
  ideas                   sugestões de configuração
  quit                    sair";

fn parse_count(arg: Option<&str>) -> std::result::Result<u32, String> {
    match arg {
        None => Ok(1),
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if (1..=MAX_QUANTITY_STEP).contains(&n) => Ok(n),
            _ => Err(format!(
                "invalid count: {} (1 to {})",
                raw, MAX_QUANTITY_STEP
            )),
        },
    }
}

/// Parses one input line. Empty lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> std::result::Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let command = match head {
        "help" | "?" => Command::Help,
        "categories" => Command::Categories,
        "cat" => {
            let id = args.next().ok_or("usage: cat <categoria>")?;
            Command::Select(Category::from_id(id).ok_or(format!("unknown category: {}", id))?)
        }
        "list" | "ls" => Command::List,
        "+" | "add" => {
            let id = args.next().ok_or("usage: + <id> [n]")?;
            Command::Add(id.to_string(), parse_count(args.next())?)
        }
        "-" | "remove" => {
            let id = args.next().ok_or("usage: - <id> [n]")?;
            Command::Remove(id.to_string(), parse_count(args.next())?)
        }
        "brand" => Command::Set(ContactField::SwitchBrand, rest.to_string()),
        "name" => Command::Set(ContactField::Name, rest.to_string()),
        "email" => Command::Set(ContactField::Email, rest.to_string()),
        "phone" => Command::Set(ContactField::Phone, rest.to_string()),
        "notes" => Command::Set(ContactField::Notes, rest.to_string()),
        "summary" => Command::Summary,
        "back" => Command::Back,
        "send" => match args.next() {
            Some("email") => Command::Send(SubmitChannel::Email),
            Some("whatsapp") => Command::Send(SubmitChannel::Whatsapp),
            _ => return Err("usage: send email|whatsapp".to_string()),
        },
        "new" => Command::New,
        "ideas" => Command::Ideas,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {} (try `help`)", other)),
    };
    Ok(Some(command))
}

fn write_device<W: Write>(out: &mut W, device: &Device, quantity: u32) -> Result<()> {
    let marker = if quantity > 0 { "●" } else { "○" };
    writeln!(out, "  {} {:<22} {:>3}  {}", marker, device.id, quantity, device.name)?;
    if let Some(description) = device.description {
        writeln!(out, "      {}", description)?;
    }
    Ok(())
}

pub fn render_categories<W: Write>(session: &ConfiguratorSession, out: &mut W) -> Result<()> {
    let active = session.active_category().id;
    for category in session.selection().catalog().categories() {
        let count = session.selection().category_count(category.id);
        let marker = if category.id == active { ">" } else { " " };
        if count > 0 {
            writeln!(out, "{} {:<11} {} ({})", marker, category.id, category.label, count)?;
        } else {
            writeln!(out, "{} {:<11} {}", marker, category.id, category.label)?;
        }
    }
    Ok(())
}

pub fn render_devices<W: Write>(session: &ConfiguratorSession, out: &mut W) -> Result<()> {
    let selection = session.selection();
    writeln!(out, "== {} ==", session.active_category().label)?;
    match session.active_devices() {
        DeviceSection::Flat(devices) => {
            for device in devices {
                write_device(out, device, selection.quantity(device.id))?;
            }
        }
        DeviceSection::Split(columns) => {
            for (sub_category, devices) in columns {
                writeln!(out, "-- {} --", sub_category.label())?;
                for device in devices {
                    write_device(out, device, selection.quantity(device.id))?;
                }
            }
        }
    }
    writeln!(out, "Ver Resumo ({} itens)", selection.total_count())?;
    Ok(())
}

pub fn render_summary<W: Write>(session: &ConfiguratorSession, out: &mut W) -> Result<()> {
    writeln!(out, "Resumo do Pedido")?;
    let brand = &session.selection().contact().switch_brand;
    writeln!(out, "Marca/Série dos seus interruptores: {}", brand)?;

    if session.is_review_empty() {
        writeln!(out, "Ainda não selecionou nenhum equipamento.")?;
        writeln!(out, "Use `back` para começar a adicionar.")?;
        return Ok(());
    }

    for group in session.summary() {
        writeln!(out, "[{}]", group.category.label)?;
        for (device, quantity) in &group.items {
            writeln!(out, "  {} x{}", device.name, quantity)?;
        }
    }
    writeln!(out, "Equipamentos: {}", session.selection().total_count())?;
    writeln!(out, "Enviar com `send email` ou `send whatsapp`.")?;
    Ok(())
}

fn render_ideas<W: Write>(session: &ConfiguratorSession, out: &mut W) -> Result<()> {
    for idea in session.selection().catalog().ideas() {
        writeln!(out, "{} [{}]", idea.title, idea.level)?;
        writeln!(out, "  {}", idea.description)?;
    }
    Ok(())
}

fn repeat<F>(times: u32, mut step: F) -> Result<()>
where
    F: FnMut() -> Result<u32>,
{
    for _ in 0..times {
        step()?;
    }
    Ok(())
}

/// Applies one command. Flow errors are reported to `out`, not returned,
/// so a typo never ends the session; only I/O failures propagate.
pub fn handle<N, W>(
    session: &mut ConfiguratorSession,
    command: Command,
    navigator: &mut N,
    out: &mut W,
) -> Result<Control>
where
    N: Navigator + ?Sized,
    W: Write,
{
    let outcome: Result<()> = match command {
        Command::Help => {
            writeln!(out, "{}", HELP)?;
            Ok(())
        }
        Command::Categories => render_categories(session, out),
        Command::Select(category) => {
            session.select_category(category);
            render_devices(session, out)
        }
        Command::List => render_devices(session, out),
        Command::Add(id, times) => {
            let selection = session.selection_mut();
            repeat(times, || selection.increment(&id))
                .and_then(|_| {
                    writeln!(out, "{} = {}", id, selection.quantity(&id))?;
                    Ok(())
                })
        }
        Command::Remove(id, times) => {
            let selection = session.selection_mut();
            repeat(times, || selection.decrement(&id))
                .and_then(|_| {
                    writeln!(out, "{} = {}", id, selection.quantity(&id))?;
                    Ok(())
                })
        }
        Command::Set(field, value) => {
            let contact = session.selection_mut().contact_mut();
            let slot = match field {
                ContactField::SwitchBrand => &mut contact.switch_brand,
                ContactField::Name => &mut contact.name,
                ContactField::Email => &mut contact.email,
                ContactField::Phone => &mut contact.phone,
                ContactField::Notes => &mut contact.notes,
            };
            *slot = value;
            Ok(())
        }
        Command::Summary => session
            .view_summary()
            .and_then(|_| render_summary(session, out)),
        Command::Back => session.back().and_then(|_| render_devices(session, out)),
        Command::Send(channel) => session.submit(channel, navigator).and_then(|_| {
            writeln!(out, "Configuração Validada")?;
            writeln!(out, "A sua configuração foi registada com sucesso.")?;
            writeln!(out, "Use `new` para uma nova configuração.")?;
            Ok(())
        }),
        Command::New => session.start_new().and_then(|_| render_devices(session, out)),
        Command::Ideas => render_ideas(session, out),
        Command::Quit => return Ok(Control::Exit),
    };

    match outcome {
        Ok(()) => Ok(Control::Continue),
        Err(e @ ConfiguratorError::IoError(_)) => Err(e),
        Err(e) => {
            tracing::debug!("Command rejected: {}", e);
            writeln!(out, "⚠️ {}", e.user_friendly_message())?;
            Ok(Control::Continue)
        }
    }
}

fn prompt(view: View) -> &'static str {
    match view {
        View::Configuring => "config> ",
        View::Reviewing => "resumo> ",
        View::Submitted => "enviado> ",
    }
}

/// Reads commands until `quit` or end of input.
pub fn run_loop<R, W, N>(
    session: &mut ConfiguratorSession,
    input: R,
    out: &mut W,
    navigator: &mut N,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    N: Navigator + ?Sized,
{
    render_devices(session, out)?;
    write!(out, "{}", prompt(session.view()))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                if handle(session, command, navigator, out)? == Control::Exit {
                    break;
                }
            }
            Ok(None) => {}
            Err(message) => writeln!(out, "⚠️ {}", message)?,
        }
        write!(out, "{}", prompt(session.view()))?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::navigator::PrintNavigator;
    use crate::core::links::LinkGenerator;
    use crate::core::Catalog;

    fn session() -> ConfiguratorSession {
        ConfiguratorSession::new(Catalog::builtin(), LinkGenerator::default())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(
            parse_command("+ switch_1 3").unwrap(),
            Some(Command::Add("switch_1".to_string(), 3))
        );
        assert_eq!(
            parse_command("remove socket").unwrap(),
            Some(Command::Remove("socket".to_string(), 1))
        );
        assert_eq!(
            parse_command("brand Efapel Logus 90").unwrap(),
            Some(Command::Set(ContactField::SwitchBrand, "Efapel Logus 90".to_string()))
        );
        assert_eq!(
            parse_command("cat climate").unwrap(),
            Some(Command::Select(Category::Climate))
        );
        assert_eq!(
            parse_command("send whatsapp").unwrap(),
            Some(Command::Send(SubmitChannel::Whatsapp))
        );
        assert!(parse_command("cat garden").is_err());
        assert!(parse_command("+ socket 0").is_err());
        assert!(parse_command("+ socket 1000").is_err());
        assert!(parse_command("+ socket 4294967295").is_err());
        assert_eq!(
            parse_command("+ socket 999").unwrap(),
            Some(Command::Add("socket".to_string(), 999))
        );
        assert!(parse_command("send fax").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_category_labels_line_up() {
        let mut out = Vec::new();
        render_categories(&session(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        for line in lines {
            let bytes = line.as_bytes();
            assert_eq!(bytes[13], b' ', "{line}");
            assert_ne!(bytes[14], b' ', "{line}");
        }
    }

    #[test]
    fn test_flow_errors_are_reported_not_returned() {
        let mut session = session();
        let mut navigator = PrintNavigator::new(Vec::new());
        let mut out = Vec::new();

        let control = handle(
            &mut session,
            Command::Add("toaster".to_string(), 1),
            &mut navigator,
            &mut out,
        )
        .unwrap();
        assert_eq!(control, Control::Continue);
        assert!(String::from_utf8(out).unwrap().contains("toaster"));
    }

    #[test]
    fn test_full_loop_submits_email() {
        let mut session = session();
        let mut navigator = PrintNavigator::new(Vec::new());
        let mut out = Vec::new();
        let script = "+ switch_1 2\ncat climate\n+ thermostat\nbrand Efapel Logus 90\nsummary\nsend email\nquit\n";

        run_loop(&mut session, script.as_bytes(), &mut out, &mut navigator).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Interruptor 1 Tecla x2"));
        assert!(printed.contains("Equipamentos: 3"));
        assert!(printed.contains("Configuração Validada"));
        assert_eq!(session.view(), View::Submitted);

        let opened = String::from_utf8(navigator.into_inner()).unwrap();
        assert!(opened.starts_with("🔗 mailto:al.casa.inteligente@proton.me?subject="));
    }

    #[test]
    fn test_empty_summary_hides_send() {
        let mut session = session();
        let mut navigator = PrintNavigator::new(Vec::new());
        let mut out = Vec::new();

        run_loop(
            &mut session,
            "summary\nsend whatsapp\n".as_bytes(),
            &mut out,
            &mut navigator,
        )
        .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Ainda não selecionou nenhum equipamento."));
        assert!(!printed.contains("Configuração Validada"));
        assert_eq!(session.view(), View::Reviewing);
        assert!(navigator.into_inner().is_empty());
    }
}

use core::str::FromStr;

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu,
    /// Menu position or exact product name.
    Buy(String),
    Set { field: String, value: String },
    Form,
    Submit,
    Clear,
    Login,
    Summary { html: bool },
    Help,
    Quit,
}

pub const HELP: &str = "\
comandos:
  menu                  ver los productos
  buy <n|nombre>        añadir un producto al carrito
  set <campo> <valor>   rellenar un campo (name, lastName1, lastName2, phone, email, address)
  form                  ver el formulario y sus errores
  submit                realizar el pedido
  clear                 borrar el pedido
  login                 registrarse / cerrar sesión
  summary [html]        ver el resumen del pedido
  help                  esta ayuda
  quit                  salir";

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "menu" | "m" => Command::Menu,
            "buy" | "b" if !rest.is_empty() => Command::Buy(rest.to_string()),
            "buy" | "b" => return Err("uso: buy <n|nombre>".to_string()),
            "set" | "s" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("uso: set <campo> <valor>".to_string());
                }
                // The value is kept untrimmed on the right; validation trims.
                Command::Set {
                    field: field.to_string(),
                    value: value.trim_start().to_string(),
                }
            }
            "form" | "f" => Command::Form,
            "submit" => Command::Submit,
            "clear" => Command::Clear,
            "login" | "logout" => Command::Login,
            "summary" => Command::Summary {
                html: rest.eq_ignore_ascii_case("html"),
            },
            "help" | "?" | "" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("comando desconocido: {other}")),
        };
        Ok(command)
    }
}

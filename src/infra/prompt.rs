use crate::domain::ConfirmationGate;
use crate::services::Classified;
use std::io::{BufRead, Write};

/// Interactive confirmation on stdin. Qualquer resposta não afirmativa,
/// inclusive fim de entrada, aborta a operação.
pub struct InteractivePrompt;

impl ConfirmationGate for InteractivePrompt {
    fn confirm(&self, plan: &Classified) -> bool {
        println!();
        println!("⚠️  ATENÇÃO: Esta operação é IRREVERSÍVEL!");
        println!(
            "Você está prestes a deletar {} grupo(s) de recursos.",
            plan.to_delete.len()
        );
        println!("Serão mantidos {} grupo(s).", plan.to_keep.len());
        println!();

        let stdin = std::io::stdin();
        read_decision(&mut stdin.lock())
    }
}

fn read_decision(input: &mut impl BufRead) -> bool {
    loop {
        print!("Deseja continuar? (s/n): ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }

        match line.trim().to_lowercase().as_str() {
            "s" | "sim" | "y" | "yes" => return true,
            "n" | "nao" | "não" | "no" => return false,
            _ => println!("Resposta inválida. Digite 's' para sim ou 'n' para não."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_answers_proceed() {
        for answer in ["s\n", "sim\n", "y\n", "YES\n"] {
            assert!(read_decision(&mut answer.as_bytes()), "resposta {answer:?}");
        }
    }

    #[test]
    fn negative_answers_abort() {
        for answer in ["n\n", "nao\n", "não\n", "No\n"] {
            assert!(!read_decision(&mut answer.as_bytes()), "resposta {answer:?}");
        }
    }

    #[test]
    fn end_of_input_aborts() {
        assert!(!read_decision(&mut "".as_bytes()));
    }

    #[test]
    fn invalid_answer_reprompts_until_decision() {
        assert!(read_decision(&mut "talvez\ns\n".as_bytes()));
        assert!(!read_decision(&mut "talvez\n".as_bytes()));
    }
}

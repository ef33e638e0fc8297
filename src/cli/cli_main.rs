use super::calculators_help::CALCULATORS_ENG_HELPER;
use super::cli_calculators::{
    Tool, generate_template, interactive_tool, quick_look, solve_from_file,
};
use crate::Examples::calc_examples::calc_examples;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            break;
        };

        match choice.trim() {
            "1" => interactive_tool(Tool::Distillation),
            "2" => interactive_tool(Tool::Reactor),
            "3" => {
                print!("\x1b[36mEnter task file path: \x1b[0m");
                let _ = io::stdout().flush();
                if let Some(path) = get_user_input() {
                    solve_from_file(&path);
                }
            }
            "4" => {
                print!("\x1b[36mTemplate file path (default task.json): \x1b[0m");
                let _ = io::stdout().flush();
                if let Some(path) = get_user_input() {
                    generate_template(&path);
                }
            }
            "5" => examples_menu(),
            "6" => {
                println!("\n=== Help ===");
                println!("{}", CALCULATORS_ENG_HELPER);
                println!("\nPress Enter to return to menu...");
                let _ = get_user_input();
            }
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to UnitOpsCalc: coursework calculators for distillation\n
    and ideal reactor design \n \x1b[0m"
    );
    println!("\x1b[33m1. McCabe-Thiele diagram\x1b[0m");
    println!("\x1b[33m2. CSTR and PFR sizing\x1b[0m");
    println!("\x1b[33m3. Solve task file\x1b[0m");
    println!("\x1b[33m4. Generate task template\x1b[0m");
    println!("\x1b[33m5. Examples\x1b[0m");
    println!("\x1b[33m6. Help\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}

fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Textbook values");
        println!("2. McCabe-Thiele curves with default inputs");
        println!("3. Reactor profiles with default inputs");
        println!("4. Chart files for the default task");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => calc_examples(0),
            "2" => quick_look(Tool::Distillation),
            "3" => quick_look(Tool::Reactor),
            "4" => calc_examples(1),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// `None` once stdin is closed or unreadable
fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

use std::thread;
use std::time::Duration;
use tuitree::settings::Settings;
use tuitree::tui::{self, RunOptions};
use tuitree::ui::{Modal, Screen, Ui, UiError};

fn main() {
    let _logging = tuitree::logging::init(None);

    match run_demo() {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!(error = %err, "demo failed");
            eprintln!("tuitree-demo: {err}");
            std::process::exit(1);
        }
    }
}

fn run_demo() -> Result<i32, UiError> {
    let mut ui = Ui::new(Screen::new(0, 0));

    let p1 = ui.add_paragraph();
    let p2 = ui.add_paragraph();
    ui.set_auto_scroll(p2, true);
    let p3 = ui.add_paragraph();

    let cl = ui.add_check_list(["Multiple Selection A", "Multiple Selection B"]);
    ui.on_choice(cl, |e| {
        tracing::info!(checked = e.checked, item = %e.item, index = e.index, "check changed");
    });
    let rl = ui.add_radio_list(["Single Selection A", "Single Selection B"]);
    ui.on_choice(rl, |e| {
        tracing::info!(checked = e.checked, item = %e.item, index = e.index, "radio changed");
    });

    let cv1 = ui.add_vertical();
    ui.set_border(cv1, true);
    for p in [p1, p2, p3] {
        ui.add_child(cv1, p);
    }

    let cv2 = ui.add_vertical();
    ui.set_border(cv2, true);
    ui.add_child(cv2, cl);
    ui.add_child(cv2, cl);

    let root = ui.add_horizontal();
    ui.set_border(root, true);
    for child in [cv1, rl, cv2] {
        ui.add_child(root, child);
    }

    ui.set_default_focus(cl);
    ui.set_text(p1, "Hello...");
    ui.set_text(
        p3,
        "Toggle between focused inputs using Tab to go forward, or Alt-Tab to go backward.",
    );
    ui.set_root(root);

    let handle = ui.handle();
    thread::spawn(move || {
        let mut count = 0u64;
        loop {
            thread::sleep(Duration::from_secs(1));
            count += 1;
            if !handle.update(move |ui| {
                ui.append_line(p2, &count.to_string());
            }) {
                break;
            }
        }
    });

    let handle = ui.handle();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(2));
        handle.update(move |ui| {
            ui.append(p1, " World!");
            ui.show_modal(Modal::new("Important Message", 50, rl));
        });

        thread::sleep(Duration::from_secs(5));
        handle.update(move |ui| {
            ui.hide_modal();
            ui.focus(rl);
        });
    });

    let options = RunOptions {
        settings: Some(Settings::load()),
        ..RunOptions::default()
    };
    let exit = tui::run(&mut ui, options)?;
    Ok(exit.code())
}

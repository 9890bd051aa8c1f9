fn main() {
    slint_build::compile("ui/app-window.slint").expect("failed to compile ui/app-window.slint");
}

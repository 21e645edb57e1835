fn main() {
    budo_manager_pwa::run();
}

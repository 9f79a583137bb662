
mod test_loader;
mod test_observers;

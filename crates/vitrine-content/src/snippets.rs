//! The code snippets orbiting the backdrop.

/// Fixed ordered set of code lines shown on the orbiting label ring.
pub const CODE_SNIPPETS: [&str; 6] = [
    "function createApp() {",
    "const data = await fetch();",
    "return <Component />;",
    "export default App;",
    "import { useState } from \"react\";",
    "const [state, setState] = useState();",
];

pub static BASE_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🐶</text></svg>">
<style>
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1200px; padding: 1rem 2rem; color: #222; }
main { display: flex; flex-wrap: wrap; gap: 3rem; }
.profile { flex: 0 1 340px; }
.profile img { max-width: 100%; border-radius: 6px; }
.profile figure { margin: 0; }
.profile figcaption { color: #666; font-size: .9rem; text-align: center; }
.attributes { list-style: none; padding: 0; line-height: 1.7; }
.comparison { flex: 1 1 560px; }
.charts { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.chart figcaption { font-weight: 600; margin-bottom: .5rem; }
.bars { display: flex; align-items: flex-end; gap: 3px; height: 220px; border-bottom: 1px solid #999; }
.bar { flex: 1; display: flex; flex-direction: column; justify-content: flex-end; height: 100%; position: relative; }
.bar .fill { display: block; background: #7aa6d8; }
.bar.current .fill { background: #d9534f; }
.bar .label { position: absolute; top: 100%; font-size: .65rem; color: #555; white-space: nowrap; transform: rotate(40deg); transform-origin: left top; }
.bar .marker { font-size: .7rem; color: #d9534f; text-align: center; white-space: nowrap; }
.error { border-left: 4px solid #d9534f; padding: .5rem 1rem; }
button { font-size: 1rem; padding: .5rem 1.2rem; cursor: pointer; }
</style>
</head>
<body>
<header><h1>Paw Shuffle 🐶</h1></header>
<main>
{{~> page}}
</main>
</body>
</html>
"#;
